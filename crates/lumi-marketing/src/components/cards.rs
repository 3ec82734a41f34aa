//! Card components for marketing sections

use leptos::*;

#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    view! {
        <div
            class="bg-white/80 backdrop-blur-sm rounded-2xl border border-gray-200 p-6 hover:shadow-lg transition-all duration-500 group"
            style=format!("transition-delay: {}ms", delay_ms)
        >
            <div class="flex items-start space-x-4">
                <div class="flex-shrink-0 w-12 h-12 bg-indigo-600 rounded-xl flex items-center justify-center text-2xl group-hover:scale-110 transition-transform duration-300">
                    {icon}
                </div>
                <div>
                    <h3 class="font-semibold text-lg mb-2 group-hover:text-indigo-600 transition-colors">{title}</h3>
                    <p class="text-gray-600">{description}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn StatCard(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-3xl lg:text-4xl font-bold text-indigo-600 mb-2">{value}</div>
            <div class="text-gray-600">{label}</div>
        </div>
    }
}

#[component]
pub fn TestimonialCard(
    quote: &'static str,
    name: &'static str,
    role: &'static str,
    school: &'static str,
    initials: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex-shrink-0 w-80 p-6 bg-white/90 backdrop-blur-sm rounded-2xl border border-gray-200 shadow hover:shadow-lg transition-all duration-500">
            <div class="flex items-center space-x-1 mb-4 text-yellow-400">
                {(0..5).map(|_| view! { <span>"★"</span> }).collect::<Vec<_>>()}
            </div>
            <blockquote class="text-gray-700 mb-6 leading-relaxed">"\""{quote}"\""</blockquote>
            <div class="flex items-center space-x-3">
                <div class="w-12 h-12 bg-indigo-600 rounded-full flex items-center justify-center text-white font-semibold">
                    {initials}
                </div>
                <div>
                    <p class="font-semibold text-gray-900">{name}</p>
                    <p class="text-sm text-gray-600">{role}</p>
                    <p class="text-xs text-indigo-600 font-medium">{school}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn DeviceCard(
    icon: &'static str,
    title: &'static str,
    subtitle: &'static str,
    width: &'static str,
    tilt: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "{} {} mx-auto bg-white/90 backdrop-blur-xl rounded-2xl border border-gray-200 shadow-lg p-4 hover:rotate-0 transition-transform duration-500",
            width, tilt,
        )>
            <div class="bg-gradient-to-br from-indigo-500 to-purple-500 rounded-xl h-32 flex items-center justify-center text-4xl">
                {icon}
            </div>
            <div class="mt-3 text-center">
                <div class="text-sm font-semibold text-gray-900">{title}</div>
                <div class="text-xs text-gray-600">{subtitle}</div>
            </div>
        </div>
    }
}
