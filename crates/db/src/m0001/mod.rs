mod event;
mod event_volunteer;
mod user;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "ecoclean",
    "m0001",
    vec_box![],
    vec_box![
        user::CreateTable,
        user::CreateUk1,
        event::CreateTable,
        event_volunteer::CreateTable,
        event_volunteer::CreateUk1,
        event_volunteer::CreateIdx1
    ]
);
