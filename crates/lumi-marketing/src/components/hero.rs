//! Hero section

use leptos::*;

use super::{reveal_class, use_reveal};

#[component]
pub fn HeroSection() -> impl IntoView {
    // threshold 0.0: the hero is on screen at load, so the latch fires on
    // the first observer callback and plays the staggered entrance once
    let state = use_reveal("hero", 0.0, false);
    let entrance = move |delay: &'static str| {
        let state = state.get();
        format!("transition-all duration-1000 {delay} {}", reveal_class(&state))
    };

    view! {
        <section id="hero" class="relative min-h-screen bg-gradient-to-br from-indigo-50 via-purple-50 to-white overflow-hidden">
            <div class="container mx-auto px-6 lg:px-16 relative z-10 min-h-screen flex items-center">
                <div class="grid lg:grid-cols-12 gap-8 items-center w-full">
                    // Content
                    <div class="lg:col-span-5 space-y-8">
                        <div class=move || entrance("delay-0")>
                            <span class="text-4xl">"🦉"</span>
                        </div>

                        <div class="space-y-6">
                            <h1 class=move || entrance("delay-200")>
                                <span class="block text-5xl lg:text-7xl font-bold leading-tight text-gray-900">"Go from"</span>
                                <span class="block text-5xl lg:text-7xl font-bold leading-tight text-transparent bg-clip-text bg-gradient-to-r from-indigo-600 to-purple-600">
                                    "Questioning"
                                </span>
                                <span class="block text-5xl lg:text-7xl font-bold leading-tight text-gray-900">"to Understanding"</span>
                            </h1>

                            <p class=move || format!(
                                "text-xl lg:text-2xl text-gray-600 max-w-lg leading-relaxed {}",
                                entrance("delay-[400ms]"),
                            )>
                                "Transform confusion into clarity with Lumi, your AI learning companion that adapts to your unique learning style."
                            </p>
                        </div>

                        <div class=move || format!("flex flex-col sm:flex-row gap-4 pt-6 {}", entrance("delay-[600ms]"))>
                            <a
                                href="/signup"
                                class="px-8 py-4 bg-indigo-600 hover:bg-indigo-700 text-white text-lg font-semibold rounded-2xl shadow-lg hover:scale-105 transition-all duration-300 text-center"
                            >
                                "Get Started →"
                            </a>
                            <a
                                href="/#chat-demo"
                                class="px-8 py-4 bg-white/80 backdrop-blur-sm border-2 border-gray-200 hover:border-indigo-600 text-gray-900 text-lg font-semibold rounded-2xl transition-all duration-300 text-center"
                            >
                                "▶ Watch Demo"
                            </a>
                        </div>

                        // Trust indicators
                        <div class=move || format!("pt-8 space-y-4 {}", entrance("delay-[800ms]"))>
                            <p class="text-sm text-gray-600 font-medium">"Trusted by 10,000+ learners worldwide"</p>
                            <div class="flex items-center space-x-4">
                                <div class="flex -space-x-2">
                                    <div class="w-8 h-8 bg-indigo-400 rounded-full border-2 border-white shadow-sm"></div>
                                    <div class="w-8 h-8 bg-purple-400 rounded-full border-2 border-white shadow-sm"></div>
                                    <div class="w-8 h-8 bg-green-400 rounded-full border-2 border-white shadow-sm"></div>
                                    <div class="w-8 h-8 bg-indigo-600 rounded-full border-2 border-white shadow-sm flex items-center justify-center">
                                        <span class="text-xs font-bold text-white">"+"</span>
                                    </div>
                                </div>
                                <div class="flex items-center space-x-1 text-yellow-400">
                                    "★★★★★"
                                    <span class="text-sm font-medium text-gray-600 ml-2">"4.9/5"</span>
                                </div>
                            </div>
                        </div>
                    </div>

                    // Mascot
                    <div class="lg:col-span-7 relative flex items-center justify-center py-24">
                        <div class=move || format!("relative z-20 {}", entrance("delay-500"))>
                            <div class="absolute inset-0 bg-indigo-600/10 rounded-full blur-2xl scale-125"></div>
                            <div class="relative w-64 h-64 lg:w-80 lg:h-80 bg-gradient-to-br from-indigo-100 to-purple-100 rounded-full flex items-center justify-center shadow-xl hover:scale-105 transition-transform duration-300">
                                <span class="text-[10rem]">"🦉"</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            // Scroll indicator
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce z-30">
                <div class="w-6 h-10 border-2 border-indigo-600/30 rounded-full flex justify-center bg-white/50 backdrop-blur-sm">
                    <div class="w-1 h-3 bg-indigo-600 rounded-full mt-2 animate-pulse"></div>
                </div>
            </div>
        </section>
    }
}
