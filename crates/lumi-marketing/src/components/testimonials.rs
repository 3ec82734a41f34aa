//! Testimonials section

use std::time::Duration;

use leptos::*;
use leptos::leptos_dom::helpers::IntervalHandle;

use super::{reveal_class, use_reveal, StatCard, TestimonialCard};

struct Testimonial {
    name: &'static str,
    role: &'static str,
    school: &'static str,
    initials: &'static str,
    quote: &'static str,
}

static TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        name: "Priya Sharma",
        role: "Grade 10 Student",
        school: "CBSE Board",
        initials: "PS",
        quote: "Lumi made physics so much easier to understand! The personalized explanations helped me improve my grades from C to A in just two months.",
    },
    Testimonial {
        name: "Arjun Patel",
        role: "Grade 9 Student",
        school: "ICSE Board",
        initials: "AP",
        quote: "The way Lumi explains complex math problems step-by-step is amazing. I finally understand concepts that confused me for weeks.",
    },
    Testimonial {
        name: "Sneha Reddy",
        role: "Grade 8 Student",
        school: "CBSE Board",
        initials: "SR",
        quote: "Chemistry was my weakest subject, but Lumi's interactive lessons and instant doubt clearing made it my favorite! Highly recommend.",
    },
    Testimonial {
        name: "Rohan Gupta",
        role: "Grade 11 Student",
        school: "CBSE Board",
        initials: "RG",
        quote: "Preparing for JEE seemed impossible until I started using Lumi. The AI tutor adapts to my learning pace perfectly.",
    },
    Testimonial {
        name: "Ananya Das",
        role: "Grade 7 Student",
        school: "ICSE Board",
        initials: "AD",
        quote: "I love how Lumi makes learning fun with interactive examples. Biology is so much more interesting now!",
    },
    Testimonial {
        name: "Karthik Kumar",
        role: "Grade 12 Student",
        school: "CBSE Board",
        initials: "KK",
        quote: "The exam preparation features are incredible. Lumi helped me identify my weak areas and improve them systematically.",
    },
];

/// Card width (w-80) plus the flex gap, in pixels.
const CARD_STRIDE_PX: usize = 320 + 24;
const ROTATE_EVERY_MS: u64 = 4_000;

#[component]
pub fn TestimonialSection() -> impl IntoView {
    let state = use_reveal("testimonials", 0.2, false);
    let (current, set_current) = create_signal(0usize);

    // auto-advancing carousel; effects only run client-side
    let started = store_value(false);
    let timer = store_value(None::<IntervalHandle>);
    create_effect(move |_| {
        if started.get_value() {
            return;
        }
        started.set_value(true);
        let handle = set_interval_with_handle(
            move || set_current.update(|index| *index = (*index + 1) % TESTIMONIALS.len()),
            Duration::from_millis(ROTATE_EVERY_MS),
        );
        if let Ok(handle) = handle {
            timer.set_value(Some(handle));
        }
    });
    on_cleanup(move || {
        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
    });

    let track_style = move || format!("transform: translateX(-{}px)", current.get() * CARD_STRIDE_PX);

    view! {
        <section id="testimonials" class="py-20 lg:py-32 bg-gradient-to-br from-indigo-50/50 to-purple-50/50">
            <div class="container mx-auto px-6 lg:px-8">
                <div class="text-center mb-16">
                    <div class=move || format!("transition-all duration-1000 {}", reveal_class(&state.get()))>
                        <div class="inline-block bg-indigo-600/10 text-indigo-600 px-4 py-2 rounded-full text-sm font-medium mb-4">
                            "Student Success Stories"
                        </div>
                        <h2 class="text-4xl lg:text-6xl font-bold mb-6">
                            "What Students "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-indigo-600 to-purple-600">"Say"</span>
                        </h2>
                        <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                            "Hear from thousands of students who've transformed their learning journey with Lumi"
                        </p>
                    </div>
                </div>

                // Carousel
                <div class="relative overflow-hidden">
                    <div class="flex gap-6 pb-4 transition-transform duration-700 ease-out" style=track_style>
                        {TESTIMONIALS.iter().map(|entry| view! {
                            <TestimonialCard
                                quote=entry.quote
                                name=entry.name
                                role=entry.role
                                school=entry.school
                                initials=entry.initials
                            />
                        }).collect::<Vec<_>>()}
                    </div>

                    // Progress dots
                    <div class="flex justify-center space-x-2 mt-8">
                        {(0..TESTIMONIALS.len()).map(|index| view! {
                            <button
                                class=move || if current.get() == index {
                                    "w-8 h-2 rounded-full bg-indigo-600 transition-all duration-300"
                                } else {
                                    "w-2 h-2 rounded-full bg-gray-400/30 hover:bg-gray-400/60 transition-all duration-300"
                                }
                                on:click=move |_| set_current.set(index)
                            ></button>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                // Stats
                <div class=move || format!(
                    "grid grid-cols-2 md:grid-cols-4 gap-8 mt-16 transition-all duration-1000 delay-[800ms] {}",
                    reveal_class(&state.get()),
                )>
                    <StatCard value="50k+" label="Happy Students"/>
                    <StatCard value="98%" label="Success Rate"/>
                    <StatCard value="500+" label="Schools"/>
                    <StatCard value="4.9★" label="Average Rating"/>
                </div>
            </div>
        </section>
    }
}
