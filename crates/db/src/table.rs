use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Username,
    Password,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Event {
    Table,
    Id,
    Title,
    Description,
    Location,
    Date,
    Time,
    CreatedBy,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum EventVolunteer {
    Table,
    Id,
    EventId,
    Username,
    EnrolledAt,
}
