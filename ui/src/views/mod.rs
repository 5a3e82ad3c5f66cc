mod add_user;
mod home;

pub use add_user::AddUser;
pub use home::Home;
