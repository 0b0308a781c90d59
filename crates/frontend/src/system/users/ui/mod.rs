mod admin;

pub use admin::AdminUsers;
