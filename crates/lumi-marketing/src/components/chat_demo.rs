//! Chat demo section
//!
//! Two phone mockups replay a scripted tutoring conversation, one message
//! per tick, once the section scrolls into view.

use std::time::Duration;

use leptos::*;
use leptos::leptos_dom::helpers::IntervalHandle;
use lumi_core::chat::{demo_threads, DemoThread, Sender, DEMO_START_DELAY_MS, DEMO_STEP_MS};

use super::{reveal_class, use_reveal};

#[component]
pub fn ChatDemoSection() -> impl IntoView {
    let state = use_reveal("chat-demo", 0.3, false);
    let [left, right] = demo_threads();
    let total = left.messages.len();

    // server render shows the finished conversation; the client replays it
    let initial = if cfg!(target_arch = "wasm32") { 0 } else { total - 1 };
    let (shown, set_shown) = create_signal(initial);

    let started = store_value(false);
    let timer = store_value(None::<IntervalHandle>);
    create_effect(move |_| {
        if !state.get().visible || started.get_value() {
            return;
        }
        started.set_value(true);
        set_timeout(
            move || {
                let handle = set_interval_with_handle(
                    move || {
                        set_shown.update(|index| {
                            if *index + 1 < total {
                                *index += 1;
                            }
                        });
                        if shown.get_untracked() + 1 >= total {
                            if let Some(handle) = timer.get_value() {
                                handle.clear();
                                timer.set_value(None);
                            }
                        }
                    },
                    Duration::from_millis(DEMO_STEP_MS),
                );
                if let Ok(handle) = handle {
                    timer.set_value(Some(handle));
                }
            },
            Duration::from_millis(DEMO_START_DELAY_MS),
        );
    });
    on_cleanup(move || {
        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
    });

    view! {
        <section id="chat-demo" class="py-20 lg:py-32 bg-gradient-to-b from-white to-indigo-50">
            <div class="container mx-auto px-6 lg:px-8">
                <div class="text-center mb-16">
                    <div class=move || format!("transition-all duration-1000 {}", reveal_class(&state.get()))>
                        <h2 class="text-4xl lg:text-6xl font-bold mb-6">
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-indigo-600 to-purple-600">"AI Tutoring"</span>
                            " in Action"
                        </h2>
                        <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                            "Watch how Lumi adapts to your learning style and breaks down complex concepts into easy-to-understand explanations."
                        </p>
                    </div>
                </div>

                <div class=move || format!("max-w-6xl mx-auto transition-all duration-1000 delay-300 {}", reveal_class(&state.get()))>
                    <div class="grid md:grid-cols-2 gap-8">
                        <PhoneMockup thread=left accent="bg-indigo-600" shown=shown/>
                        <PhoneMockup thread=right accent="bg-purple-600" shown=shown/>
                    </div>
                </div>

                <div class="text-center mt-12">
                    <a
                        href="/signup"
                        class=move || format!(
                            "inline-block px-8 py-4 bg-indigo-600 hover:bg-indigo-700 hover:scale-105 text-white font-semibold rounded-2xl transition-all duration-1000 delay-700 {}",
                            reveal_class(&state.get()),
                        )
                    >
                        "Try Lumi Now - It's Free"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PhoneMockup(
    thread: DemoThread,
    accent: &'static str,
    shown: ReadSignal<usize>,
) -> impl IntoView {
    view! {
        <div class="mx-auto">
            <div class="w-80 bg-white/95 backdrop-blur-xl rounded-3xl shadow-xl border border-gray-200 overflow-hidden">
                // Header
                <div class=format!("{accent} px-4 py-3 flex items-center justify-between")>
                    <div class="flex items-center space-x-2">
                        <div class="w-8 h-8 rounded-full bg-white/20 flex items-center justify-center">"🦉"</div>
                        <div>
                            <h3 class="font-semibold text-white text-sm">"Lumi"</h3>
                            <p class="text-xs text-white/80">{thread.track}</p>
                        </div>
                    </div>
                    <div class="flex items-center space-x-1">
                        <div class="w-2 h-2 bg-green-400 rounded-full animate-pulse"></div>
                        <span class="text-xs text-white/90">"Online"</span>
                    </div>
                </div>

                // Messages
                <div class="p-4 space-y-4 h-96 overflow-y-auto bg-gradient-to-b from-gray-50 to-white">
                    {thread.messages.iter().enumerate().map(|(index, message)| {
                        let bubble = move || format!(
                            "transition-all duration-500 {}",
                            if index <= shown.get() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-4" },
                        );
                        match message.sender {
                            Sender::Student => view! {
                                <div class=bubble>
                                    <div class="flex justify-end">
                                        <div class="max-w-xs">
                                            <div class=format!("{accent} text-white rounded-2xl rounded-br-md px-3 py-2")>
                                                <p class="text-xs">{message.body}</p>
                                            </div>
                                            <p class="text-xs text-gray-500 mt-1 text-right">{message.stamp}</p>
                                        </div>
                                    </div>
                                </div>
                            }.into_view(),
                            Sender::Tutor => view! {
                                <div class=bubble>
                                    <div class="flex items-start space-x-2">
                                        <div class=format!("w-6 h-6 rounded-full {accent} flex items-center justify-center flex-shrink-0 text-xs")>
                                            "🦉"
                                        </div>
                                        <div class="max-w-xs">
                                            <div class="bg-gray-100 rounded-2xl rounded-bl-md px-3 py-2">
                                                <p class="text-xs text-gray-900">{message.body}</p>
                                            </div>
                                            <p class="text-xs text-gray-500 mt-1">{message.stamp}</p>
                                        </div>
                                    </div>
                                </div>
                            }.into_view(),
                        }
                    }).collect::<Vec<_>>()}
                </div>

                // Input
                <div class="border-t border-gray-200 p-3">
                    <div class="flex items-center space-x-2">
                        <div class="flex-1 bg-gray-100 rounded-2xl px-3 py-2">
                            <p class="text-xs text-gray-500">{thread.placeholder}</p>
                        </div>
                        <button class=format!("{accent} rounded-full w-8 h-8 text-white text-xs")>"➤"</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
