//! Landing page
//!
//! One long-scroll page; every section below the hero registers with the
//! reveal engine and animates in as it crosses the viewport.

use leptos::*;

use crate::components::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <MarketingNav/>
            <HeroSection/>
            <ChatDemoSection/>
            <FeatureShowcase/>
            <PlatformsSection/>
            <PricingSection/>
            <TestimonialSection/>
            <BlogSection/>
            <ContactSection/>
            <Footer/>
        </div>
    }
}
