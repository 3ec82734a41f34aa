//! Blog teaser section

use leptos::*;

use super::{reveal_class, use_reveal};

struct BlogPost {
    title: &'static str,
    excerpt: &'static str,
    author: &'static str,
    date: &'static str,
    read_time: &'static str,
    category: &'static str,
    artwork: &'static str,
}

static POSTS: [BlogPost; 3] = [
    BlogPost {
        title: "The Future of AI-Powered Education: Transforming Learning Experiences",
        excerpt: "Discover how artificial intelligence is revolutionizing education, making personalized learning accessible to students worldwide and enhancing educational outcomes.",
        author: "Dr. Sarah Chen",
        date: "Jan 15, 2024",
        read_time: "5 min read",
        category: "AI Education",
        artwork: "🤖",
    },
    BlogPost {
        title: "Personalized Learning Paths: How Lumi Adapts to Your Learning Style",
        excerpt: "Learn about the science behind personalized education and how our adaptive AI technology creates unique learning experiences for every student.",
        author: "Prof. Michael Rodriguez",
        date: "Jan 12, 2024",
        read_time: "7 min read",
        category: "Learning Science",
        artwork: "🧭",
    },
    BlogPost {
        title: "Study Tips: Maximizing Your Learning Potential with AI Assistance",
        excerpt: "Effective study strategies combined with AI-powered tools can dramatically improve your learning outcomes. Here's how to get the most out of your study sessions.",
        author: "Emma Thompson",
        date: "Jan 10, 2024",
        read_time: "4 min read",
        category: "Study Tips",
        artwork: "📝",
    },
];

#[component]
pub fn BlogSection() -> impl IntoView {
    let state = use_reveal("blog", 0.2, false);

    view! {
        <section id="blog" class="py-20 lg:py-32 bg-white">
            <div class="container mx-auto px-6 lg:px-8">
                <div class="text-center mb-16">
                    <div class=move || format!("transition-all duration-1000 {}", reveal_class(&state.get()))>
                        <div class="inline-block bg-indigo-600/10 text-indigo-600 px-4 py-2 rounded-full text-sm font-medium mb-4">
                            "Latest Insights"
                        </div>
                        <h2 class="text-4xl lg:text-6xl font-bold mb-6">
                            "From Our "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-indigo-600 to-purple-600">"Blog"</span>
                        </h2>
                        <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                            "Stay updated with the latest trends in AI-powered education, learning strategies, "
                            "and insights from our expert team."
                        </p>
                    </div>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 mb-12">
                    {POSTS.iter().enumerate().map(|(index, post)| view! {
                        <a
                            href="/signup"
                            class=move || format!(
                                "group block bg-white/80 backdrop-blur-sm rounded-2xl border border-gray-200 overflow-hidden hover:shadow-xl transition-all duration-500 {}",
                                reveal_class(&state.get()),
                            )
                            style=format!("transition-delay: {}ms", index * 200 + 300)
                        >
                            // Artwork
                            <div class="relative overflow-hidden">
                                <div class="w-full h-48 bg-gradient-to-br from-indigo-100 to-purple-100 flex items-center justify-center text-6xl group-hover:scale-105 transition-transform duration-500">
                                    {post.artwork}
                                </div>
                                <div class="absolute top-4 left-4">
                                    <span class="bg-indigo-600 text-white px-3 py-1 rounded-full text-xs font-medium">
                                        {post.category}
                                    </span>
                                </div>
                            </div>

                            <div class="p-6">
                                <h3 class="font-bold text-lg mb-3 group-hover:text-indigo-600 transition-colors">
                                    {post.title}
                                </h3>
                                <p class="text-gray-600 text-sm mb-4">{post.excerpt}</p>

                                <div class="flex items-center justify-between text-xs text-gray-500">
                                    <div class="flex items-center space-x-3">
                                        <span>{post.author}</span>
                                        <span>{post.date}</span>
                                    </div>
                                    <span>{post.read_time}</span>
                                </div>
                            </div>
                        </a>
                    }).collect::<Vec<_>>()}
                </div>

                <div class="text-center">
                    <div class=move || format!("transition-all duration-1000 delay-[600ms] {}", reveal_class(&state.get()))>
                        <a
                            href="/signup"
                            class="inline-block px-6 py-3 bg-white border-2 border-gray-200 hover:border-indigo-600 text-gray-900 font-semibold rounded-xl transition-all duration-300"
                        >
                            "View All Articles →"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
