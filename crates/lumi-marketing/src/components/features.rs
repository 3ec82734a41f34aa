//! Feature showcase sections
//!
//! The two overlapping feature sections are the parallax consumers of the
//! reveal engine: the one-shot latch plays the entrance animation while
//! continuous progress drives a translate/opacity ramp as they scroll in.

use leptos::*;
use lumi_core::reveal::{parallax_offset, parallax_opacity};

use super::{reveal_class, use_reveal, FeatureCard};

struct FeatureEntry {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

struct FeatureSectionData {
    section_id: &'static str,
    badge: &'static str,
    title_accent: &'static str,
    title_rest: &'static str,
    description: &'static str,
    visual_icon: &'static str,
    visual_title: &'static str,
    visual_caption: &'static str,
    entries: [FeatureEntry; 3],
    reverse: bool,
}

static SECTIONS: [FeatureSectionData; 2] = [
    FeatureSectionData {
        section_id: "feature-personalized",
        badge: "AI-Powered Education",
        title_accent: "Personalized",
        title_rest: " Learning",
        description: "Lumi adapts to your unique learning style, pace, and preferences to create a truly personalized educational experience that grows with you.",
        visual_icon: "📚",
        visual_title: "Interactive Learning",
        visual_caption: "Experience education like never before",
        entries: [
            FeatureEntry {
                icon: "🧠",
                title: "Adaptive AI Tutor",
                description: "Our AI learns how you learn best and adjusts teaching methods in real-time.",
            },
            FeatureEntry {
                icon: "🎯",
                title: "Personalized Pathways",
                description: "Custom learning paths designed specifically for your goals and interests.",
            },
            FeatureEntry {
                icon: "⚡",
                title: "Instant Feedback",
                description: "Get immediate, constructive feedback to accelerate your learning progress.",
            },
        ],
        reverse: false,
    },
    FeatureSectionData {
        section_id: "feature-collaborative",
        badge: "Learn Together",
        title_accent: "Collaborative",
        title_rest: " Learning",
        description: "Connect with peers, share knowledge, and learn together in our vibrant community of curious minds from around the world.",
        visual_icon: "🤝",
        visual_title: "Better Together",
        visual_caption: "A community of curious minds",
        entries: [
            FeatureEntry {
                icon: "👥",
                title: "Study Groups",
                description: "Join or create study groups with learners who share your interests and goals.",
            },
            FeatureEntry {
                icon: "💡",
                title: "Peer Insights",
                description: "Learn from different perspectives and approaches shared by your peers.",
            },
            FeatureEntry {
                icon: "📖",
                title: "Shared Resources",
                description: "Access a vast library of resources created and curated by the community.",
            },
        ],
        reverse: true,
    },
];

#[component]
pub fn FeatureShowcase() -> impl IntoView {
    view! {
        <div id="features">
            {SECTIONS.iter().map(|data| view! { <FeatureSection data=data/> }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn FeatureSection(data: &'static FeatureSectionData) -> impl IntoView {
    let state = use_reveal(data.section_id, 0.2, true);

    let slide = move || {
        let progress = state.get().progress;
        format!(
            "transform: translateY({}px); opacity: {}",
            parallax_offset(progress),
            parallax_opacity(progress),
        )
    };
    let entrance = move |extra: &'static str| {
        format!("transition-all duration-1000 {extra} {}", reveal_class(&state.get()))
    };

    let column = if data.reverse { "lg:order-2" } else { "" };
    let visual_column = if data.reverse { "lg:order-1" } else { "" };

    view! {
        <section
            id=data.section_id
            class="py-20 lg:py-32 relative z-10 min-h-screen flex items-center"
            style=slide
        >
            <div class="container mx-auto px-6 lg:px-8 w-full">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    // Content
                    <div class=format!("space-y-8 {column}")>
                        <div class=move || entrance("")>
                            <div class="inline-block bg-indigo-600/10 text-indigo-600 px-4 py-2 rounded-full text-sm font-medium mb-4">
                                {data.badge}
                            </div>
                            <h2 class="text-4xl lg:text-5xl font-bold mb-6 leading-tight">
                                <span class="text-transparent bg-clip-text bg-gradient-to-r from-indigo-600 to-purple-600">
                                    {data.title_accent}
                                </span>
                                <span class="text-gray-900">{data.title_rest}</span>
                            </h2>
                            <p class="text-xl text-gray-600 leading-relaxed">{data.description}</p>
                        </div>

                        <div class=move || format!("grid gap-6 {}", entrance("delay-300"))>
                            {data.entries.iter().enumerate().map(|(index, entry)| view! {
                                <FeatureCard
                                    icon=entry.icon
                                    title=entry.title
                                    description=entry.description
                                    delay_ms={(index as u32) * 200 + 300}
                                />
                            }).collect::<Vec<_>>()}
                        </div>

                        <div class=move || format!("pt-4 {}", entrance("delay-700"))>
                            <a
                                href="/signup"
                                class="inline-block px-6 py-3 bg-indigo-600 hover:bg-indigo-700 hover:scale-105 text-white font-semibold rounded-xl transition-all duration-300"
                            >
                                "Learn More →"
                            </a>
                        </div>
                    </div>

                    // Visual
                    <div class=format!("relative {visual_column}")>
                        <div class=move || entrance("delay-500")>
                            <div class="relative">
                                <div class="absolute inset-0 bg-gradient-to-br from-indigo-600/20 to-purple-600/20 rounded-3xl blur-3xl scale-110"></div>
                                <div class="relative bg-white/90 backdrop-blur-xl border border-gray-200 shadow-xl p-8 rounded-3xl">
                                    <div class="w-full h-64 bg-gradient-to-br from-indigo-100 to-purple-100 rounded-2xl flex items-center justify-center">
                                        <div class="text-center space-y-4">
                                            <div class="w-20 h-20 bg-indigo-600 rounded-2xl flex items-center justify-center mx-auto text-4xl">
                                                {data.visual_icon}
                                            </div>
                                            <h3 class="text-xl font-semibold text-gray-900">{data.visual_title}</h3>
                                            <p class="text-gray-600">{data.visual_caption}</p>
                                        </div>
                                    </div>
                                </div>

                                <div class="absolute -top-6 -right-6 bg-white/90 backdrop-blur-lg rounded-2xl p-4 shadow-lg border border-gray-200">
                                    <div class="text-center">
                                        <div class="text-2xl font-bold text-indigo-600">"98%"</div>
                                        <div class="text-sm text-gray-600">"Success Rate"</div>
                                    </div>
                                </div>

                                <div class="absolute -bottom-4 -left-4 bg-white/90 backdrop-blur-lg rounded-2xl p-4 shadow-lg border border-gray-200">
                                    <div class="flex items-center space-x-2">
                                        <div class="w-3 h-3 bg-green-500 rounded-full animate-pulse"></div>
                                        <span class="text-sm font-medium text-gray-900">"Active Learning"</span>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
