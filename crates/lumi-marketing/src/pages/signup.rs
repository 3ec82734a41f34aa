//! Sign-up page

use std::time::Duration;

use leptos::*;
use lumi_core::auth::{mask_email, validate_otp};

const CREATE_DELAY_MS: u64 = 1_000;

static SCHOOL_BOARDS: [(&str, &str); 5] = [
    ("cbse", "CBSE"),
    ("icse", "ICSE"),
    ("ib", "IB (International Baccalaureate)"),
    ("state", "State Board"),
    ("other", "Other"),
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Stage {
    Form,
    Verify,
    Done,
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (board, set_board) = create_signal(String::from("cbse"));
    let (loading, set_loading) = create_signal(false);
    let (stage, set_stage) = create_signal(Stage::Form);
    let (otp, set_otp) = create_signal(String::new());
    let (otp_error, set_otp_error) = create_signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_loading.set(true);
        // fake account creation, then move on to the OTP step
        set_timeout(
            move || {
                set_loading.set(false);
                set_stage.set(Stage::Verify);
            },
            Duration::from_millis(CREATE_DELAY_MS),
        );
    };

    let verify_code = move |_| {
        if validate_otp(&otp.get()) {
            set_stage.set(Stage::Done);
        } else {
            set_otp_error.set(true);
        }
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-indigo-50 via-purple-50 to-white flex items-center justify-center px-4 py-8">
            <div class="w-full max-w-md">
                // Header
                <div class="text-center mb-8">
                    <a href="/" class="inline-block mb-6 text-5xl">"🦉"</a>
                    <h1 class="text-3xl font-bold text-gray-900 mb-2">"Join Lumi"</h1>
                    <p class="text-gray-600">"Start your personalized learning journey today"</p>
                </div>

                <div class="bg-white/80 backdrop-blur-sm border border-gray-200 rounded-2xl p-8 shadow-xl">
                    {move || match stage.get() {
                        Stage::Form => view! {
                            <div>
                                <form on:submit=on_submit class="space-y-6">
                                    <div class="space-y-2">
                                        <label class="text-sm font-medium text-gray-900">"Full Name"</label>
                                        <input
                                            type="text"
                                            required
                                            class="w-full h-12 px-4 rounded-xl border border-gray-300 bg-gray-50 focus:border-indigo-500 focus:ring-2 focus:ring-indigo-500 transition-all duration-200"
                                            placeholder="Enter your full name"
                                            on:input=move |ev| set_name.set(event_target_value(&ev))
                                            prop:value=name
                                        />
                                    </div>

                                    <div class="space-y-2">
                                        <label class="text-sm font-medium text-gray-900">"Email"</label>
                                        <input
                                            type="email"
                                            required
                                            class="w-full h-12 px-4 rounded-xl border border-gray-300 bg-gray-50 focus:border-indigo-500 focus:ring-2 focus:ring-indigo-500 transition-all duration-200"
                                            placeholder="Enter your email"
                                            on:input=move |ev| set_email.set(event_target_value(&ev))
                                            prop:value=email
                                        />
                                    </div>

                                    <div class="space-y-2">
                                        <label class="text-sm font-medium text-gray-900">"Password"</label>
                                        <input
                                            type="password"
                                            required
                                            class="w-full h-12 px-4 rounded-xl border border-gray-300 bg-gray-50 focus:border-indigo-500 focus:ring-2 focus:ring-indigo-500 transition-all duration-200"
                                            placeholder="Create a strong password"
                                            on:input=move |ev| set_password.set(event_target_value(&ev))
                                            prop:value=password
                                        />
                                    </div>

                                    <div class="space-y-2">
                                        <label class="text-sm font-medium text-gray-900">"School Board"</label>
                                        <select
                                            class="w-full h-12 px-4 rounded-xl border border-gray-300 bg-gray-50 focus:border-indigo-500 focus:ring-2 focus:ring-indigo-500 transition-all duration-200"
                                            on:change=move |ev| set_board.set(event_target_value(&ev))
                                        >
                                            {SCHOOL_BOARDS.iter().map(|(value, label)| view! {
                                                <option value=*value selected=move || board.get() == *value>
                                                    {*label}
                                                </option>
                                            }).collect::<Vec<_>>()}
                                        </select>
                                    </div>

                                    <button
                                        type="submit"
                                        disabled=loading
                                        class="w-full h-12 bg-indigo-600 hover:bg-indigo-700 disabled:opacity-60 text-white font-semibold rounded-xl shadow hover:shadow-lg transition-all duration-300"
                                    >
                                        {move || if loading.get() { "Creating account..." } else { "Create Account" }}
                                    </button>
                                </form>

                                // Divider
                                <div class="my-6 relative">
                                    <div class="border-t border-gray-200"></div>
                                    <span class="absolute left-1/2 -translate-x-1/2 -top-2.5 bg-white px-2 text-xs uppercase text-gray-500">
                                        "Or continue with"
                                    </span>
                                </div>

                                <div class="space-y-3">
                                    <button class="w-full h-12 bg-gray-50 border border-gray-300 hover:bg-gray-100 rounded-xl font-medium transition-all duration-200">
                                        "Continue with Google"
                                    </button>
                                    <button class="w-full h-12 bg-gray-50 border border-gray-300 hover:bg-gray-100 rounded-xl font-medium transition-all duration-200">
                                        "Continue with Apple"
                                    </button>
                                </div>

                                <div class="mt-6 text-center">
                                    <p class="text-sm text-gray-600">
                                        "Already have an account? "
                                        <a href="/login" class="text-indigo-600 hover:text-indigo-800 font-semibold transition-colors duration-200">
                                            "Sign in"
                                        </a>
                                    </p>
                                </div>
                            </div>
                        }.into_view(),
                        Stage::Verify => view! {
                            <div class="space-y-6">
                                <div class="text-center">
                                    <div class="text-4xl mb-3">"📬"</div>
                                    <h2 class="text-xl font-bold text-gray-900 mb-1">"Check your inbox"</h2>
                                    <p class="text-sm text-gray-600">
                                        "We sent a code to " {move || mask_email(&email.get())}
                                        ". (This demo accepts any 6-digit code.)"
                                    </p>
                                </div>
                                <input
                                    type="text"
                                    inputmode="numeric"
                                    maxlength="6"
                                    class="w-full h-12 px-4 rounded-xl border border-gray-300 tracking-widest text-center"
                                    placeholder="Enter 6-digit OTP"
                                    on:input=move |ev| {
                                        set_otp.set(event_target_value(&ev));
                                        set_otp_error.set(false);
                                    }
                                    prop:value=otp
                                />
                                <Show when=move || otp_error.get()>
                                    <p class="text-sm text-red-600 text-center">"That doesn't look like a 6-digit code."</p>
                                </Show>
                                <button
                                    on:click=verify_code
                                    class="w-full h-12 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-xl"
                                >
                                    "Verify OTP"
                                </button>
                            </div>
                        }.into_view(),
                        Stage::Done => view! {
                            <div class="text-center py-8 space-y-4">
                                <div class="text-5xl">"🎉"</div>
                                <h2 class="text-2xl font-bold text-gray-900">"You're all set!"</h2>
                                <p class="text-gray-600">"Your account is ready. Time to meet Lumi."</p>
                                <a
                                    href="/app"
                                    class="inline-block px-8 py-3 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-xl transition"
                                >
                                    "Open Dashboard →"
                                </a>
                            </div>
                        }.into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}
