//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let (newsletter_email, set_newsletter_email) = create_signal(String::new());
    let (subscribed, set_subscribed) = create_signal(false);

    let on_subscribe = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !newsletter_email.get().trim().is_empty() {
            set_subscribed.set(true);
            set_newsletter_email.set(String::new());
        }
    };

    view! {
        <footer class="bg-gray-900 text-gray-100 py-20">
            <div class="container mx-auto px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-12 mb-16">
                    // Brand & newsletter
                    <div class="space-y-6">
                        <div class="flex items-center space-x-2">
                            <span class="text-2xl">"🦉"</span>
                            <span class="text-xl font-bold">"Lumi"</span>
                        </div>
                        <p class="text-gray-400 leading-relaxed">
                            "Transform your learning journey with AI-powered personalized education. "
                            "Go from questioning to understanding."
                        </p>

                        <div class="space-y-3">
                            <h4 class="font-semibold">"Stay updated"</h4>
                            <Show
                                when=move || !subscribed.get()
                                fallback=|| view! {
                                    <p class="text-sm text-green-400">"Thanks! You're on the list."</p>
                                }
                            >
                                <form on:submit=on_subscribe class="flex space-x-2">
                                    <input
                                        type="email"
                                        required
                                        class="flex-1 px-3 py-2 bg-white/10 border border-white/20 rounded-lg text-gray-100 placeholder:text-gray-500 focus:border-white/50 focus:outline-none"
                                        placeholder="Enter your email"
                                        on:input=move |ev| set_newsletter_email.set(event_target_value(&ev))
                                        prop:value=newsletter_email
                                    />
                                    <button
                                        type="submit"
                                        class="px-3 py-2 border border-white/20 rounded-lg hover:bg-white/10 transition"
                                    >
                                        "📧"
                                    </button>
                                </form>
                            </Show>
                        </div>
                    </div>

                    // Product
                    <div class="space-y-4">
                        <h4 class="font-semibold text-lg">"Product"</h4>
                        <div class="space-y-3">
                            <a href="/#features" class="block text-gray-400 hover:text-white transition-colors">"Features"</a>
                            <a href="/#pricing" class="block text-gray-400 hover:text-white transition-colors">"Pricing"</a>
                            <a href="/#chat-demo" class="block text-gray-400 hover:text-white transition-colors">"AI Tutoring"</a>
                            <a href="/#platforms" class="block text-gray-400 hover:text-white transition-colors">"Mobile App"</a>
                        </div>
                    </div>

                    // Company
                    <div class="space-y-4">
                        <h4 class="font-semibold text-lg">"Company"</h4>
                        <div class="space-y-3">
                            <a href="/#blog" class="block text-gray-400 hover:text-white transition-colors">"Blog"</a>
                            <a href="/#testimonials" class="block text-gray-400 hover:text-white transition-colors">"Success Stories"</a>
                            <a href="/#contact" class="block text-gray-400 hover:text-white transition-colors">"Contact"</a>
                            <a href="/#contact" class="block text-gray-400 hover:text-white transition-colors">"Careers"</a>
                        </div>
                    </div>

                    // Support
                    <div class="space-y-4">
                        <h4 class="font-semibold text-lg">"Support"</h4>
                        <div class="space-y-3">
                            <a href="/#contact" class="block text-gray-400 hover:text-white transition-colors">"Help Centre"</a>
                            <a href="/#contact" class="block text-gray-400 hover:text-white transition-colors">"Terms of Service"</a>
                            <a href="/#contact" class="block text-gray-400 hover:text-white transition-colors">"Privacy Policy"</a>
                        </div>
                    </div>
                </div>

                <div class="border-t border-white/10 pt-8 flex flex-col md:flex-row items-center justify-between gap-4">
                    <p class="text-sm text-gray-500">"© 2024 Lumi Learning. All rights reserved."</p>
                    <p class="text-sm text-gray-500">"Made with ♥ for curious minds"</p>
                </div>
            </div>
        </footer>
    }
}
