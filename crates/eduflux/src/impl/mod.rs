mod account;
mod course;
mod external_account;
mod payment;
mod token;
