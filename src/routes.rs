#[path = "routes/health_check.rs"]
mod health_check_route;
#[path = "routes/home.rs"]
mod home_route;
#[path = "routes/waitlist.rs"]
mod waitlist_route;

pub use health_check_route::health_check;
pub use home_route::{home, waitlist_page};
pub use waitlist_route::join_waitlist;
