//! Pricing section

use leptos::*;

use super::{reveal_class, use_reveal};

struct Plan {
    name: &'static str,
    monthly: &'static str,
    annual: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    popular: bool,
    button: &'static str,
}

static PLANS: [Plan; 3] = [
    Plan {
        name: "Free",
        monthly: "₹0",
        annual: "₹0",
        description: "Perfect for trying out Lumi",
        features: &[
            "5 AI conversations per day",
            "Basic subject support",
            "Learning progress tracking",
            "Mobile app access",
        ],
        popular: false,
        button: "Get Started Free",
    },
    Plan {
        name: "Student",
        monthly: "₹199",
        annual: "₹1,999",
        description: "Ideal for individual students",
        features: &[
            "Unlimited AI conversations",
            "All subjects & boards supported",
            "Advanced learning analytics",
            "Personalized study plans",
            "Homework help & explanations",
            "Practice tests & quizzes",
            "Priority support",
        ],
        popular: true,
        button: "Start Learning",
    },
    Plan {
        name: "Premium",
        monthly: "₹399",
        annual: "₹3,999",
        description: "Best for serious learners",
        features: &[
            "Everything in Student plan",
            "1-on-1 tutoring sessions (2/month)",
            "Custom learning paths",
            "Advanced performance insights",
            "Family sharing (up to 3 accounts)",
            "Offline content access",
            "Early access to new features",
            "24/7 premium support",
        ],
        popular: false,
        button: "Go Premium",
    },
];

#[component]
pub fn PricingSection() -> impl IntoView {
    let state = use_reveal("pricing", 0.2, false);
    let (annual, set_annual) = create_signal(false);

    let toggle_class = move |is_annual_button: bool| {
        if annual.get() == is_annual_button {
            "px-6 py-3 rounded-xl text-sm font-medium bg-indigo-600 text-white shadow transition-all duration-200 relative"
        } else {
            "px-6 py-3 rounded-xl text-sm font-medium text-gray-600 hover:text-gray-900 transition-all duration-200 relative"
        }
    };

    view! {
        <section id="pricing" class="py-20 lg:py-32 bg-gradient-to-br from-indigo-50 to-purple-50">
            <div class="container mx-auto px-6 lg:px-16">
                <div class="text-center mb-16">
                    <div class=move || format!("transition-all duration-1000 {}", reveal_class(&state.get()))>
                        <div class="inline-flex items-center gap-2 bg-indigo-600/10 text-indigo-600 px-4 py-2 rounded-full text-sm font-medium mb-6">
                            "★ Pricing Plans"
                        </div>
                        <h2 class="text-4xl lg:text-5xl font-bold text-gray-900 mb-6">
                            "Choose Your Learning"
                            <span class="block text-transparent bg-clip-text bg-gradient-to-r from-indigo-600 to-purple-600">
                                "Journey"
                            </span>
                        </h2>
                        <p class="text-xl text-gray-600 max-w-2xl mx-auto mb-8">
                            "Flexible pricing options designed to support every student's learning goals and budget."
                        </p>
                    </div>

                    // Billing toggle
                    <div class="inline-flex items-center bg-white/50 backdrop-blur-sm border border-gray-200 rounded-2xl p-1 shadow">
                        <button on:click=move |_| set_annual.set(false) class=move || toggle_class(false)>
                            "Monthly"
                        </button>
                        <button on:click=move |_| set_annual.set(true) class=move || toggle_class(true)>
                            "Annual"
                            <span class="absolute -top-2 -right-2 bg-purple-600 text-white text-xs px-2 py-0.5 rounded-full">
                                "Save 17%"
                            </span>
                        </button>
                    </div>
                </div>

                <div class="grid lg:grid-cols-3 gap-8 max-w-7xl mx-auto">
                    {PLANS.iter().map(|plan| {
                        let card_class = if plan.popular {
                            "relative bg-white/60 backdrop-blur-sm border border-indigo-300 rounded-3xl p-8 shadow-xl ring-1 ring-indigo-200 transition-all duration-300 hover:shadow-2xl hover:scale-105"
                        } else {
                            "relative bg-white/60 backdrop-blur-sm border border-gray-200 rounded-3xl p-8 shadow transition-all duration-300 hover:shadow-xl hover:scale-105 hover:border-indigo-200"
                        };
                        view! {
                            <div class=card_class>
                                <Show when=move || plan.popular>
                                    <div class="absolute -top-4 left-1/2 -translate-x-1/2">
                                        <span class="bg-indigo-600 text-white px-4 py-2 rounded-full text-sm shadow">
                                            "Most Popular"
                                        </span>
                                    </div>
                                </Show>

                                <div class="text-center mb-8">
                                    <h3 class="text-2xl font-bold text-gray-900 mb-2">{plan.name}</h3>
                                    <div class="mb-4">
                                        <span class="text-4xl lg:text-5xl font-bold text-gray-900">
                                            {move || if annual.get() { plan.annual } else { plan.monthly }}
                                        </span>
                                        <span class="text-gray-600 ml-2">
                                            {move || if annual.get() { "/per year" } else { "/per month" }}
                                        </span>
                                    </div>
                                    <p class="text-gray-600">{plan.description}</p>
                                </div>

                                <div class="space-y-4 mb-8">
                                    {plan.features.iter().map(|feature| view! {
                                        <div class="flex items-start gap-3">
                                            <div class="flex-shrink-0 w-5 h-5 bg-indigo-600/10 rounded-full flex items-center justify-center mt-0.5">
                                                <span class="text-indigo-600 text-xs">"✓"</span>
                                            </div>
                                            <span class="text-gray-700 text-sm leading-relaxed">{*feature}</span>
                                        </div>
                                    }).collect::<Vec<_>>()}
                                </div>

                                <a
                                    href="/signup"
                                    class="block w-full py-3 bg-indigo-600 hover:bg-indigo-700 text-white text-center font-semibold rounded-xl transition-all duration-300 hover:scale-105"
                                >
                                    {plan.button}
                                </a>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <div class="text-center mt-12">
                    <p class="text-gray-600 text-sm">
                        "All plans include a 7-day free trial. No credit card required. Cancel anytime."
                    </p>
                </div>
            </div>
        </section>
    }
}
