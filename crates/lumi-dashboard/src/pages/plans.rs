//! Subscription plans page

use leptos::*;

struct Plan {
    id: &'static str,
    name: &'static str,
    price: &'static str,
    period: &'static str,
    icon: &'static str,
    tile: &'static str,
    popular: bool,
    features: &'static [&'static str],
    devices: &'static str,
}

static PLANS: [Plan; 4] = [
    Plan {
        id: "free",
        name: "Free",
        price: "$0",
        period: "forever",
        icon: "⚡",
        tile: "bg-gray-100",
        popular: false,
        features: &["5 questions per day", "Basic subject support", "Community forum access"],
        devices: "1 device",
    },
    Plan {
        id: "basic",
        name: "Basic",
        price: "$9.99",
        period: "monthly",
        icon: "👑",
        tile: "bg-blue-100",
        popular: false,
        features: &["Unlimited questions", "All subjects supported", "Learning history", "Email support"],
        devices: "2 devices",
    },
    Plan {
        id: "premium",
        name: "Premium",
        price: "$19.99",
        period: "monthly",
        icon: "⭐",
        tile: "bg-purple-100",
        popular: true,
        features: &["Everything in Basic", "Brain Rush games", "Advanced analytics", "Priority support"],
        devices: "2 devices",
    },
    Plan {
        id: "ultimate",
        name: "Ultimate",
        price: "$29.99",
        period: "monthly",
        icon: "👑",
        tile: "bg-gradient-to-br from-purple-400 to-pink-400",
        popular: false,
        features: &["Everything in Premium", "1-on-1 tutoring sessions", "Family sharing", "24/7 support"],
        devices: "4 devices",
    },
];

#[component]
pub fn PlansPage() -> impl IntoView {
    let (selected, set_selected) = create_signal("free");

    view! {
        <div class="flex-1 p-6 overflow-auto bg-gradient-to-br from-indigo-50 to-purple-50">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-8">
                    <h1 class="text-4xl font-bold mb-2">"Choose your plan"</h1>
                    <p class="text-gray-600">"Select the perfect plan for your learning journey"</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                    {PLANS.iter().map(|plan| view! {
                        <div
                            class=move || format!(
                                "relative p-6 bg-white rounded-lg shadow cursor-pointer transition-all duration-300 hover:shadow-xl {}",
                                if selected.get() == plan.id { "ring-2 ring-indigo-600" } else { "" },
                            )
                            on:click=move |_| set_selected.set(plan.id)
                        >
                            <Show when=move || plan.popular>
                                <span class="absolute -top-2 left-1/2 -translate-x-1/2 bg-indigo-600 text-white text-xs px-3 py-1 rounded-full">
                                    "Most Popular"
                                </span>
                            </Show>

                            <div class=format!("w-full h-20 rounded-lg mb-4 flex items-center justify-center text-3xl {}", plan.tile)>
                                {plan.icon}
                            </div>

                            <div class="text-center mb-6">
                                <h3 class="text-xl font-bold mb-2">{plan.name}</h3>
                                <div class="text-3xl font-bold text-indigo-600 mb-1">{plan.price}</div>
                                <div class="text-sm text-gray-600">"per " {plan.period}</div>
                            </div>

                            <div class="space-y-2 mb-4">
                                {plan.features.iter().map(|feature| view! {
                                    <div class="flex items-center space-x-2">
                                        <span class="text-green-500 text-sm">"✓"</span>
                                        <span class="text-sm">{*feature}</span>
                                    </div>
                                }).collect::<Vec<_>>()}
                            </div>

                            <div class="pt-4 border-t border-gray-200 text-sm text-gray-600 mb-4">
                                "Devices: " {plan.devices}
                            </div>

                            <button class=move || if plan.id == "free" {
                                "w-full py-2 border border-gray-300 rounded-lg font-medium text-gray-700".to_string()
                            } else if plan.popular {
                                "w-full py-2 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition".to_string()
                            } else {
                                "w-full py-2 bg-gray-900 hover:bg-gray-800 text-white rounded-lg font-medium transition".to_string()
                            }>
                                {if plan.id == "free" { "Current Plan" } else { "Subscribe" }}
                            </button>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>

                <div class="p-6 bg-white/90 rounded-lg shadow text-center">
                    <h3 class="font-bold text-lg mb-2">"Need Help Choosing?"</h3>
                    <p class="text-gray-600 mb-4">
                        "Our team is here to help you find the perfect plan for your learning needs."
                    </p>
                    <div class="space-x-4">
                        <a href="/forum" class="inline-block px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50 transition">
                            "Contact Support"
                        </a>
                        <button class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg transition">
                            "Start Free Trial"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
