//! Forum mockup page

use leptos::*;

struct FeedPost {
    author: &'static str,
    avatar_tone: &'static str,
    question: &'static str,
    description: &'static str,
    time: &'static str,
    likes: u32,
    comments: u32,
    category: &'static str,
}

static FEED: [FeedPost; 3] = [
    FeedPost {
        author: "Student A",
        avatar_tone: "bg-red-500",
        question: "Topic Number 7 is very hard",
        description: "I tried this but Number 7 I can't because it's very hard for me even though I really tried I can't figure out how to solve it.",
        time: "2 min ago",
        likes: 5,
        comments: 3,
        category: "Math",
    },
    FeedPost {
        author: "Student B",
        avatar_tone: "bg-blue-500",
        question: "Question 8 is so difficult",
        description: "I need help with this math problem. Can anyone explain the solution step by step?",
        time: "5 min ago",
        likes: 8,
        comments: 12,
        category: "Math",
    },
    FeedPost {
        author: "Student C",
        avatar_tone: "bg-green-500",
        question: "English Grammar Question",
        description: "I'm confused about when to use 'who' vs 'whom'. Can someone help me understand?",
        time: "10 min ago",
        likes: 3,
        comments: 7,
        category: "English",
    },
];

struct MyQuestion {
    question: &'static str,
    description: &'static str,
    time: &'static str,
    likes: u32,
    comments: u32,
    answers: u32,
}

static MINE: [MyQuestion; 2] = [
    MyQuestion {
        question: "How to solve quadratic equations?",
        description: "I need help understanding the quadratic formula",
        time: "1 hour ago",
        likes: 12,
        comments: 8,
        answers: 5,
    },
    MyQuestion {
        question: "Physics motion problems",
        description: "Struggling with velocity and acceleration problems",
        time: "2 hours ago",
        likes: 7,
        comments: 4,
        answers: 3,
    },
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Feed,
    Mine,
}

#[component]
pub fn ForumPage() -> impl IntoView {
    let (tab, set_tab) = create_signal(Tab::Feed);
    let (search, set_search) = create_signal(String::new());
    let (new_question, set_new_question) = create_signal(String::new());
    let (new_details, set_new_details) = create_signal(String::new());
    let (posted, set_posted) = create_signal(false);

    let post_question = move |_| {
        if new_question.get().trim().is_empty() {
            return;
        }
        // local-only mockup: acknowledge and clear, nothing persists
        set_new_question.set(String::new());
        set_new_details.set(String::new());
        set_posted.set(true);
    };

    let tab_class = move |this: Tab| {
        if tab.get() == this {
            "px-6 py-2 rounded-lg bg-indigo-600 text-white font-medium transition"
        } else {
            "px-6 py-2 rounded-lg text-gray-600 hover:text-gray-900 font-medium transition"
        }
    };

    // search narrows the static feed client-side
    let visible_feed = move || {
        let needle = search.get().to_lowercase();
        FEED.iter()
            .filter(|post| {
                needle.is_empty()
                    || post.question.to_lowercase().contains(&needle)
                    || post.description.to_lowercase().contains(&needle)
                    || post.category.to_lowercase().contains(&needle)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="flex-1 p-6 overflow-auto bg-gradient-to-br from-indigo-50 to-purple-50">
            <div class="max-w-4xl mx-auto">
                <div class="text-center mb-8">
                    <div class="flex items-center justify-center space-x-3 mb-4">
                        <div class="w-16 h-16 bg-white rounded-full flex items-center justify-center text-3xl shadow">
                            "🦉"
                        </div>
                        <div class="text-left">
                            <h1 class="text-3xl font-bold">"Welcome to the forum"</h1>
                            <p class="text-gray-600">"Connect with your peers and solve your problems together!"</p>
                        </div>
                    </div>
                </div>

                // Search bar
                <div class="mb-6 p-4 bg-white/90 rounded-lg shadow">
                    <div class="flex space-x-4">
                        <input
                            type="text"
                            class="flex-1 h-10 px-4 bg-gray-50 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500"
                            placeholder="Search questions..."
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                            prop:value=search
                        />
                        <button class="px-4 h-10 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg transition">
                            "+ Ask"
                        </button>
                    </div>
                </div>

                // Tabs
                <div class="flex justify-center mb-8">
                    <div class="flex bg-white/80 rounded-xl p-1 border border-gray-200">
                        <button on:click=move |_| set_tab.set(Tab::Feed) class=move || tab_class(Tab::Feed)>
                            "Q&A Feed"
                        </button>
                        <button on:click=move |_| set_tab.set(Tab::Mine) class=move || tab_class(Tab::Mine)>
                            "My Q&A"
                        </button>
                    </div>
                </div>

                <Show
                    when=move || tab.get() == Tab::Feed
                    fallback=|| view! {
                        <div class="space-y-4">
                            {MINE.iter().map(|question| view! {
                                <div class="p-6 bg-white/90 rounded-lg shadow">
                                    <div class="flex items-start justify-between">
                                        <div class="flex-1">
                                            <h3 class="font-bold text-lg mb-2">{question.question}</h3>
                                            <p class="text-sm text-gray-600 mb-4">{question.description}</p>
                                            <div class="flex items-center space-x-4 text-sm text-gray-500">
                                                <span>{question.time}</span>
                                                <span>"• " {question.answers} " answers"</span>
                                                <span>"• " {question.likes} " likes"</span>
                                                <span>"• " {question.comments} " comments"</span>
                                            </div>
                                        </div>
                                        <button class="px-3 py-1 border border-gray-300 rounded-lg text-sm hover:bg-gray-50 transition">
                                            "View Answers"
                                        </button>
                                    </div>
                                </div>
                            }).collect::<Vec<_>>()}
                        </div>
                    }
                >
                    <div class="space-y-4">
                        <For
                            each=visible_feed
                            key=|post| post.question
                            children=|post| view! {
                                <div class="p-6 bg-white/90 rounded-lg shadow">
                                    <div class="flex items-start space-x-4">
                                        <div class=format!(
                                            "w-10 h-10 {} rounded-full flex items-center justify-center text-white font-bold",
                                            post.avatar_tone,
                                        )>
                                            {post.author.chars().next().unwrap_or('?')}
                                        </div>
                                        <div class="flex-1">
                                            <div class="flex items-center space-x-2 mb-2">
                                                <span class="font-semibold">{post.author}</span>
                                                <span class="text-sm text-gray-500">"• " {post.time}</span>
                                                <span class="text-xs bg-indigo-600/10 text-indigo-600 px-2 py-1 rounded-full">
                                                    {post.category}
                                                </span>
                                            </div>
                                            <h3 class="font-bold text-lg mb-2">{post.question}</h3>
                                            <p class="text-sm text-gray-600 mb-4">{post.description}</p>
                                            <div class="flex items-center space-x-4 text-sm text-gray-500">
                                                <button class="hover:text-indigo-600 transition">"👍 " {post.likes}</button>
                                                <button class="hover:text-indigo-600 transition">"💬 " {post.comments}</button>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            }
                        />
                    </div>
                </Show>

                // Ask a question
                <div class="mt-8 p-6 bg-white/90 rounded-lg shadow">
                    <h3 class="font-bold text-lg mb-4">"Ask a Question"</h3>
                    <Show when=move || posted.get()>
                        <p class="mb-4 text-sm text-green-600">"Posted! Your peers will see it shortly."</p>
                    </Show>
                    <div class="space-y-4">
                        <input
                            type="text"
                            class="w-full h-11 px-4 bg-gray-50 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500"
                            placeholder="What's your question?"
                            on:input=move |ev| {
                                set_new_question.set(event_target_value(&ev));
                                set_posted.set(false);
                            }
                            prop:value=new_question
                        />
                        <textarea
                            rows="4"
                            class="w-full px-4 py-3 bg-gray-50 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500"
                            placeholder="Describe your question in detail..."
                            on:input=move |ev| set_new_details.set(event_target_value(&ev))
                            prop:value=new_details
                        ></textarea>
                        <button
                            on:click=post_question
                            class="w-full py-3 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-lg transition"
                        >
                            "Post Question"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
