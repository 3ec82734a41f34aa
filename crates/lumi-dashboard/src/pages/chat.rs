//! Simulated tutor chat page
//!
//! The "AI" is [`TutorScript`]: a canned reply picked per question and
//! pushed after a short typing delay. Nothing leaves the browser.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::*;
use lumi_core::chat::{Message, Sender, TutorScript, REPLY_DELAY_MS};

#[component]
pub fn ChatPage() -> impl IntoView {
    let (messages, set_messages) = create_signal(vec![Message::tutor(TutorScript::greeting())]);
    let (draft, set_draft) = create_signal(String::new());
    let (typing, set_typing) = create_signal(false);
    let script = Rc::new(RefCell::new(TutorScript::new()));

    let send = {
        let script = Rc::clone(&script);
        move || {
            let text = draft.get().trim().to_string();
            if text.is_empty() || typing.get() {
                return;
            }
            set_messages.update(|log| log.push(Message::student(text.clone())));
            set_draft.set(String::new());
            set_typing.set(true);

            let reply = script.borrow_mut().reply_to(&text);
            set_timeout(
                move || {
                    set_typing.set(false);
                    set_messages.update(|log| log.push(Message::tutor(reply)));
                },
                Duration::from_millis(REPLY_DELAY_MS),
            );
        }
    };
    let send_click = send.clone();

    view! {
        <div class="flex-1 flex flex-col h-screen">
            // Header
            <div class="border-b border-gray-200 p-4 flex items-center justify-between bg-white">
                <div class="flex items-center space-x-3">
                    <div class="w-10 h-10 bg-gradient-to-br from-indigo-100 to-purple-100 rounded-full flex items-center justify-center text-xl">
                        "🦉"
                    </div>
                    <div>
                        <h2 class="font-semibold">"Lumi"</h2>
                        <p class="text-sm text-gray-600">"AI Learning Companion"</p>
                    </div>
                </div>
                <div class="flex items-center space-x-4">
                    <div class="flex items-center space-x-2">
                        <span class="text-purple-500">"🏆"</span>
                        <span class="text-sm font-medium">"150 Points"</span>
                    </div>
                    <div class="flex items-center space-x-2">
                        <span class="text-orange-500">"⚡"</span>
                        <span class="text-sm font-medium">"5 Day Streak"</span>
                    </div>
                </div>
            </div>

            // Transcript
            <div class="flex-1 overflow-y-auto p-4 space-y-4">
                <For
                    each=move || messages.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(_, message)| view! { <ChatBubble message=message/> }
                />
                <Show when=move || typing.get()>
                    <div class="flex items-start space-x-3">
                        <div class="w-8 h-8 bg-gradient-to-br from-indigo-100 to-purple-100 rounded-full flex items-center justify-center flex-shrink-0">
                            "🦉"
                        </div>
                        <div class="bg-white rounded-lg shadow p-3">
                            <span class="text-sm text-gray-500 animate-pulse">"Lumi is typing..."</span>
                        </div>
                    </div>
                </Show>
            </div>

            // Input
            <div class="border-t border-gray-200 p-4 bg-white">
                <div class="flex items-center space-x-2">
                    <input
                        type="text"
                        class="flex-1 h-11 px-4 border border-gray-300 rounded-full focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500"
                        placeholder="Ask me anything..."
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                send();
                            }
                        }
                        prop:value=draft
                    />
                    <button
                        class="w-11 h-11 bg-indigo-600 hover:bg-indigo-700 text-white rounded-full transition"
                        on:click=move |_| send_click()
                    >
                        "➤"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ChatBubble(message: Message) -> impl IntoView {
    match message.sender {
        Sender::Tutor => view! {
            <div class="flex justify-start">
                <div class="flex items-start space-x-3">
                    <div class="w-8 h-8 bg-gradient-to-br from-indigo-100 to-purple-100 rounded-full flex items-center justify-center flex-shrink-0">
                        "🦉"
                    </div>
                    <div class="max-w-xs lg:max-w-md">
                        <div class="bg-white rounded-lg shadow p-3">
                            <p class="text-sm">{message.body}</p>
                        </div>
                        <p class="text-xs text-gray-500 mt-1">{message.stamp}</p>
                    </div>
                </div>
            </div>
        }
        .into_view(),
        Sender::Student => view! {
            <div class="flex justify-end">
                <div class="max-w-xs lg:max-w-md">
                    <div class="bg-indigo-600 text-white rounded-lg shadow p-3">
                        <p class="text-sm">{message.body}</p>
                    </div>
                    <p class="text-xs text-gray-500 mt-1 text-right">{message.stamp}</p>
                </div>
            </div>
        }
        .into_view(),
    }
}
