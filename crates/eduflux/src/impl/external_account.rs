use iso8601_timestamp::Timestamp;

use crate::models::{ExternalAccount, LeaderboardEntry, Platform, PlatformStats, Role, User};
use crate::remote::AccountSync;
use crate::{Eduflux, Error, Result};

impl User {
    /// Link a competitive-programming profile
    ///
    /// At most one account per platform: re-linking replaces the
    /// existing entry wholesale.
    pub async fn link_account(mut self, eduflux: &Eduflux, account: ExternalAccount) -> Result<User> {
        self.external_accounts
            .retain(|existing| existing.platform != account.platform);
        self.external_accounts.push(account);

        self.update(eduflux).await
    }

    /// Apply stats reported by the sync collaborator
    pub async fn apply_sync(
        mut self,
        eduflux: &Eduflux,
        platform: Platform,
        stats: PlatformStats,
    ) -> Result<User> {
        let account = self
            .external_accounts
            .iter_mut()
            .find(|account| account.platform == platform)
            .ok_or(Error::IncorrectData { with: "platform" })?;

        account.stats = stats;
        account.last_synced = Timestamp::now_utc();

        self.update(eduflux).await
    }

    /// Refresh one linked account from the remote platform
    ///
    /// The store is only touched after the fetch succeeds; a failed
    /// or timed-out fetch leaves the record as it was.
    pub async fn sync_account(
        self,
        eduflux: &Eduflux,
        remote: &dyn AccountSync,
        platform: Platform,
    ) -> Result<User> {
        let username = self
            .external_accounts
            .iter()
            .find(|account| account.platform == platform)
            .map(|account| account.username.clone())
            .ok_or(Error::IncorrectData { with: "platform" })?;

        let stats = remote.fetch_stats(platform, &username).await?;

        self.apply_sync(eduflux, platform, stats).await
    }

    /// Students ranked by total solved problems across platforms
    pub async fn leaderboard(eduflux: &Eduflux) -> Result<Vec<LeaderboardEntry>> {
        let users = eduflux.database.list_users().await?;

        let mut entries: Vec<LeaderboardEntry> = users
            .into_iter()
            .filter(|user| user.role == Role::Student)
            .map(|user| LeaderboardEntry {
                id: user.id,
                name: user.name,
                total_solved: user
                    .external_accounts
                    .iter()
                    .map(|account| account.stats.solved_count)
                    .sum(),
                rank: 0,
            })
            .collect();

        entries.sort_by(|a, b| b.total_solved.cmp(&a.total_solved));

        for (index, entry) in entries.iter_mut().enumerate() {
            entry.rank = index + 1;
        }

        Ok(entries)
    }
}
