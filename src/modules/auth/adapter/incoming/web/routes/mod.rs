pub mod login;
pub mod logout;
pub mod signup;

pub use login::{__path_login_handler, login_handler, LoginForm};
pub use logout::{__path_logout_handler, logout_handler};
pub use signup::{__path_signup_handler, signup_handler, SignupForm};
