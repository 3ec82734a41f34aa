//! Contact section

use leptos::*;

use super::{reveal_class, use_reveal};

#[component]
pub fn ContactSection() -> impl IntoView {
    let state = use_reveal("contact", 0.2, false);
    let entrance = move |extra: &'static str| {
        format!("transition-all duration-1000 {extra} {}", reveal_class(&state.get()))
    };

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());
    let (submitted, set_submitted) = create_signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // local simulation; there is no submission endpoint
        set_submitted.set(true);
    };

    view! {
        <section id="contact" class="py-20 lg:py-32 bg-gradient-to-b from-white to-indigo-50">
            <div class="container mx-auto px-6 lg:px-8">
                <div class="text-center mb-16">
                    <div class=move || entrance("")>
                        <div class="inline-block bg-indigo-600/10 text-indigo-600 px-4 py-2 rounded-full text-sm font-medium mb-4">
                            "Get in Touch"
                        </div>
                        <h2 class="text-4xl lg:text-6xl font-bold mb-6">
                            "Ready to Start "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-indigo-600 to-purple-600">"Learning?"</span>
                        </h2>
                        <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                            "Join thousands of learners who've transformed their understanding with Lumi. "
                            "We're here to help you succeed every step of the way."
                        </p>
                    </div>
                </div>

                <div class="grid lg:grid-cols-2 gap-16 items-start">
                    // Form
                    <div class=move || entrance("delay-300")>
                        <div class="p-8 bg-white/90 backdrop-blur-xl rounded-2xl border border-gray-200 shadow-xl">
                            <Show
                                when=move || !submitted.get()
                                fallback=|| view! {
                                    <div class="text-center py-12">
                                        <div class="text-5xl mb-4">"✓"</div>
                                        <h3 class="text-2xl font-bold text-gray-900 mb-2">"Thank You!"</h3>
                                        <p class="text-gray-600">"We'll get back to you as soon as possible."</p>
                                    </div>
                                }
                            >
                                <div class="mb-6">
                                    <h3 class="text-2xl font-bold mb-2">"Send us a message"</h3>
                                    <p class="text-gray-600">
                                        "Have questions? We'd love to hear from you. Send us a message and we'll respond as soon as possible."
                                    </p>
                                </div>

                                <form on:submit=on_submit class="space-y-6">
                                    <div>
                                        <label class="block text-sm font-medium mb-2">"Full Name"</label>
                                        <input
                                            type="text"
                                            required
                                            class="w-full h-12 px-4 bg-gray-50 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 transition-colors"
                                            placeholder="Enter your full name"
                                            on:input=move |ev| set_name.set(event_target_value(&ev))
                                            prop:value=name
                                        />
                                    </div>

                                    <div>
                                        <label class="block text-sm font-medium mb-2">"Email Address"</label>
                                        <input
                                            type="email"
                                            required
                                            class="w-full h-12 px-4 bg-gray-50 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 transition-colors"
                                            placeholder="Enter your email address"
                                            on:input=move |ev| set_email.set(event_target_value(&ev))
                                            prop:value=email
                                        />
                                    </div>

                                    <div>
                                        <label class="block text-sm font-medium mb-2">"Message"</label>
                                        <textarea
                                            rows="5"
                                            required
                                            class="w-full px-4 py-3 bg-gray-50 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 transition-colors resize-none"
                                            placeholder="Tell us how we can help you..."
                                            on:input=move |ev| set_message.set(event_target_value(&ev))
                                            prop:value=message
                                        ></textarea>
                                    </div>

                                    <button
                                        type="submit"
                                        class="w-full py-4 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-xl transition"
                                    >
                                        "➤ Send Message"
                                    </button>
                                </form>
                            </Show>
                        </div>
                    </div>

                    // Contact methods & social proof
                    <div class="space-y-8">
                        <div class=move || entrance("delay-500")>
                            <h3 class="text-2xl font-bold mb-6">"Get in touch"</h3>
                            <div class="space-y-4">
                                <ContactMethod icon="📧" title="Email Us" detail="hello@lumilearn.app"/>
                                <ContactMethod icon="💬" title="Live Chat" detail="Available 24/7"/>
                                <ContactMethod icon="📞" title="Call Us" detail="+1 (555) 123-4567"/>
                            </div>
                        </div>

                        <div class=move || entrance("delay-700")>
                            <div class="p-6 bg-indigo-600 text-white rounded-2xl shadow-xl">
                                <div class="mb-4 text-yellow-400">"★★★★★"</div>
                                <blockquote class="text-lg mb-4">
                                    "\"Lumi transformed how I study. The personalized approach and instant feedback "
                                    "helped me understand complex concepts I'd been struggling with for months!\""
                                </blockquote>
                                <div class="flex items-center space-x-3">
                                    <div class="w-10 h-10 bg-white/20 rounded-full flex items-center justify-center">
                                        <span class="text-sm font-semibold">"SJ"</span>
                                    </div>
                                    <div>
                                        <p class="font-semibold">"Sarah Johnson"</p>
                                        <p class="text-sm opacity-90">"Computer Science Student"</p>
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class=move || entrance("delay-[900ms]")>
                            <div class="grid grid-cols-2 gap-4">
                                <div class="p-4 text-center bg-white/80 backdrop-blur-sm rounded-2xl border border-gray-200">
                                    <div class="text-2xl font-bold text-indigo-600 mb-1">"10k+"</div>
                                    <div class="text-sm text-gray-600">"Happy Learners"</div>
                                </div>
                                <div class="p-4 text-center bg-white/80 backdrop-blur-sm rounded-2xl border border-gray-200">
                                    <div class="text-2xl font-bold text-indigo-600 mb-1">"98%"</div>
                                    <div class="text-sm text-gray-600">"Success Rate"</div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactMethod(icon: &'static str, title: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <div class="p-6 bg-white/80 backdrop-blur-sm rounded-2xl border border-gray-200 hover:shadow-lg transition-all duration-300 group cursor-pointer">
            <div class="flex items-center space-x-4">
                <div class="w-12 h-12 bg-indigo-600 rounded-xl flex items-center justify-center text-2xl group-hover:scale-110 transition-transform">
                    {icon}
                </div>
                <div>
                    <h4 class="font-semibold">{title}</h4>
                    <p class="text-gray-600">{detail}</p>
                </div>
            </div>
        </div>
    }
}
