use crate::models::{Course, CourseFilter, PriceType, ProblemSet, Resource, User};
use crate::{Eduflux, Error, Result};

impl Course {
    /// Filtered catalog search; an empty filter is the full catalog
    pub async fn search(eduflux: &Eduflux, filter: &CourseFilter) -> Result<Vec<Course>> {
        eduflux.database.search_courses(filter).await
    }

    /// Fetch a course by id
    pub async fn fetch(eduflux: &Eduflux, id: &str) -> Result<Course> {
        eduflux.database.find_course(id).await
    }

    /// Distinct category tags, excluding the `Free` sentinel
    pub async fn tags(eduflux: &Eduflux) -> Result<Vec<String>> {
        eduflux.database.list_course_tags().await
    }

    /// Admin command: add a course to the catalog
    ///
    /// The id and cover image are generated; modules and downloads
    /// start empty.
    pub async fn create(
        eduflux: &Eduflux,
        title: String,
        description: String,
        instructor: String,
        price: f64,
        tags: Vec<String>,
    ) -> Result<Course> {
        let image_seed = title
            .split_whitespace()
            .next()
            .unwrap_or("course")
            .to_string();

        let course = Course {
            id: format!("c_{}", ulid::Ulid::new()),
            title,
            description,
            instructor,
            price,
            tags,
            image_url: format!("https://picsum.photos/seed/{}/600/400", image_seed),
            price_type: if price == 0.0 {
                PriceType::Free
            } else {
                PriceType::Paid
            },
            modules: vec![],
            downloads: vec![],
        };

        eduflux.database.insert_course(&course).await?;

        Ok(course)
    }
}

impl Resource {
    /// List all curated resources
    pub async fn list(eduflux: &Eduflux) -> Result<Vec<Resource>> {
        eduflux.database.list_resources().await
    }
}

impl ProblemSet {
    /// List all practice problem categories
    pub async fn list(eduflux: &Eduflux) -> Result<Vec<ProblemSet>> {
        eduflux.database.list_problem_sets().await
    }
}

impl User {
    /// Enrol in a free course
    ///
    /// Idempotence guard: a second call for the same course fails with
    /// `AlreadyEnrolled` instead of duplicating the entry. Paid
    /// courses go through the purchase command instead.
    pub async fn enroll_free(&self, eduflux: &Eduflux, course_id: &str) -> Result<User> {
        let course = eduflux.database.find_course(course_id).await?;

        if course.price_type == PriceType::Paid {
            return Err(Error::IncorrectData { with: "course" });
        }

        eduflux.database.enroll_user(&self.id, course_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceFilter;
    use crate::test::for_test;

    #[async_std::test]
    async fn empty_filter_returns_catalog_in_store_order() {
        let (eduflux, _receiver) = for_test().await;

        let courses = Course::search(&eduflux, &CourseFilter::default())
            .await
            .unwrap();

        assert_eq!(courses.len(), 6);
        assert_eq!(courses[0].id, "c1");
    }

    #[async_std::test]
    async fn filters_compose_with_and() {
        let (eduflux, _receiver) = for_test().await;

        let filter = CourseFilter {
            search_term: Some("react".to_string()),
            tag: Some("Frontend".to_string()),
            price: PriceFilter::Paid,
        };

        let courses = Course::search(&eduflux, &filter).await.unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].id, "c3");

        // Same term without the tag also matches the Java course,
        // whose description mentions React
        let filter = CourseFilter {
            search_term: Some("react".to_string()),
            ..Default::default()
        };
        assert_eq!(Course::search(&eduflux, &filter).await.unwrap().len(), 2);
    }

    #[async_std::test]
    async fn search_matches_instructor() {
        let (eduflux, _receiver) = for_test().await;

        let filter = CourseFilter {
            search_term: Some("tanaka".to_string()),
            ..Default::default()
        };

        let courses = Course::search(&eduflux, &filter).await.unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].id, "c2");
    }

    #[async_std::test]
    async fn tags_exclude_free_sentinel() {
        let (eduflux, _receiver) = for_test().await;

        let tags = Course::tags(&eduflux).await.unwrap();
        assert!(tags.contains(&"DSA".to_string()));
        assert!(!tags.iter().any(|tag| tag.to_lowercase() == "free"));

        // De-duplicated
        let mut sorted = tags.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), tags.len());
    }

    #[async_std::test]
    async fn created_course_lands_in_catalog() {
        let (eduflux, _receiver) = for_test().await;

        let course = Course::create(
            &eduflux,
            "Rust Systems Programming".to_string(),
            "Ownership, lifetimes and fearless concurrency.".to_string(),
            "Niko M.".to_string(),
            0.0,
            vec!["Rust".to_string()],
        )
        .await
        .unwrap();

        assert_eq!(course.price_type, PriceType::Free);
        assert!(course.modules.is_empty());

        let fetched = Course::fetch(&eduflux, &course.id).await.unwrap();
        assert_eq!(fetched, course);
    }

    #[async_std::test]
    async fn free_enrolment_is_guarded() {
        let (eduflux, _receiver) = for_test().await;
        let user = eduflux.database.find_user("student01").await.unwrap();

        let updated = user.enroll_free(&eduflux, "c6").await.unwrap();
        assert!(updated.enrolled_courses.contains(&"c6".to_string()));

        assert_eq!(
            updated.enroll_free(&eduflux, "c6").await,
            Err(Error::AlreadyEnrolled)
        );

        // Paid courses cannot be enrolled for free
        assert_eq!(
            updated.enroll_free(&eduflux, "c2").await,
            Err(Error::IncorrectData { with: "course" })
        );

        assert_eq!(
            updated.enroll_free(&eduflux, "missing").await,
            Err(Error::UnknownCourse)
        );
    }
}
