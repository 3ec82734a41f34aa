//! Cross-platform section

use leptos::*;

use super::{reveal_class, use_reveal, DeviceCard};

#[component]
pub fn PlatformsSection() -> impl IntoView {
    let state = use_reveal("platforms", 0.2, false);
    let entrance = move |extra: &'static str| {
        format!("transition-all duration-1000 {extra} {}", reveal_class(&state.get()))
    };

    view! {
        <section id="platforms" class="py-20 lg:py-32 bg-gradient-to-br from-white to-gray-50">
            <div class="container mx-auto px-6 lg:px-8">
                <div class="text-center mb-16">
                    <div class=move || entrance("")>
                        <div class="inline-block bg-indigo-600/10 text-indigo-600 px-4 py-2 rounded-full text-sm font-medium mb-4">
                            "Available Everywhere"
                        </div>
                        <h2 class="text-4xl lg:text-6xl font-bold mb-6">
                            "Learn "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-indigo-600 to-purple-600">"Anywhere"</span>
                            ", Anytime"
                        </h2>
                        <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                            "Access Lumi on all your devices. Start learning on your phone, continue on your tablet, "
                            "and finish on your computer - your progress syncs seamlessly across all platforms."
                        </p>
                    </div>
                </div>

                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    // Device stack
                    <div class=move || format!("relative {}", entrance("delay-300"))>
                        <div class="absolute inset-0 bg-gradient-to-br from-indigo-600/20 to-purple-600/20 rounded-3xl blur-3xl scale-110"></div>
                        <div class="relative space-y-8">
                            <DeviceCard icon="📱" title="Mobile App" subtitle="iOS & Android" width="w-48" tilt="rotate-3"/>
                            <DeviceCard icon="💻" title="Tablet Experience" subtitle="Optimized for iPad" width="w-64" tilt="-rotate-2"/>
                            <DeviceCard icon="🖥️" title="Desktop Platform" subtitle="Full-featured experience" width="w-80" tilt="rotate-1"/>
                        </div>
                    </div>

                    // Download
                    <div class="space-y-8">
                        <div class=move || entrance("delay-500")>
                            <h3 class="text-3xl lg:text-4xl font-bold mb-6">
                                "Download the "
                                <span class="text-transparent bg-clip-text bg-gradient-to-r from-indigo-600 to-purple-600">"Lumi App"</span>
                            </h3>
                            <p class="text-lg text-gray-600 mb-8">
                                "Get instant access to personalized learning experiences. Download our app and join "
                                "millions of students who are already learning smarter with Lumi."
                            </p>
                        </div>

                        <div class=move || format!("space-y-4 {}", entrance("delay-700"))>
                            <a
                                href="/signup"
                                class="block w-full sm:w-auto sm:inline-block px-8 py-4 bg-gray-900 hover:bg-gray-800 text-white font-semibold rounded-2xl text-center hover:scale-105 transition-all duration-300"
                            >
                                "▶ Download for Android"
                            </a>
                            <a
                                href="/signup"
                                class="block w-full sm:w-auto sm:inline-block sm:ml-4 px-8 py-4 bg-white border-2 border-gray-200 hover:border-indigo-600 text-gray-900 font-semibold rounded-2xl text-center hover:scale-105 transition-all duration-300"
                            >
                                " Download for iOS"
                            </a>
                        </div>

                        <div class=move || format!("grid grid-cols-1 sm:grid-cols-2 gap-4 pt-8 {}", entrance("delay-[900ms]"))>
                            <div class="p-4 bg-white/80 backdrop-blur-sm rounded-2xl border border-gray-200">
                                <div class="flex items-center space-x-3">
                                    <div class="w-10 h-10 bg-green-500 rounded-xl flex items-center justify-center">
                                        <div class="w-3 h-3 bg-white rounded-full animate-pulse"></div>
                                    </div>
                                    <div>
                                        <div class="font-semibold text-sm">"Offline Mode"</div>
                                        <div class="text-xs text-gray-600">"Learn without internet"</div>
                                    </div>
                                </div>
                            </div>
                            <div class="p-4 bg-white/80 backdrop-blur-sm rounded-2xl border border-gray-200">
                                <div class="flex items-center space-x-3">
                                    <div class="w-10 h-10 bg-indigo-600 rounded-xl flex items-center justify-center">
                                        <div class="w-3 h-3 bg-white rounded-full animate-pulse"></div>
                                    </div>
                                    <div>
                                        <div class="font-semibold text-sm">"Sync Across Devices"</div>
                                        <div class="text-xs text-gray-600">"Seamless experience"</div>
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
