pub mod chat;
pub mod footer;
pub mod home;
pub mod navbar;
pub mod particles;

pub use chat::ChatView;
pub use footer::Footer;
pub use home::HomeView;
pub use navbar::Navbar;
pub use particles::ParticleBackground;
