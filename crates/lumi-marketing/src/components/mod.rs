//! Marketing site components

mod blog;
mod cards;
mod chat_demo;
mod contact;
mod features;
mod footer;
mod hero;
mod nav;
mod platforms;
mod pricing;
mod reveal;
mod testimonials;

pub use blog::BlogSection;
pub use cards::*;
pub use chat_demo::ChatDemoSection;
pub use contact::ContactSection;
pub use features::FeatureShowcase;
pub use footer::Footer;
pub use hero::HeroSection;
pub use nav::MarketingNav;
pub use platforms::PlatformsSection;
pub use pricing::PricingSection;
pub use reveal::{provide_reveal_context, reveal_class, use_reveal};
pub use testimonials::TestimonialSection;
