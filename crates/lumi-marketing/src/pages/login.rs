//! Login page

use std::time::Duration;

use leptos::*;
use lumi_core::auth::{mask_email, validate_otp};

/// Matches the fake network round-trip on the signup page.
const SIGN_IN_DELAY_MS: u64 = 1_000;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);

    let (show_forgot, set_show_forgot) = create_signal(false);
    let (otp_stage, set_otp_stage) = create_signal(false);
    let (forgot_email, set_forgot_email) = create_signal(String::new());
    let (otp, set_otp) = create_signal(String::new());
    let (otp_error, set_otp_error) = create_signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_loading.set(true);
        // fake sign-in round-trip, then hand over to the dashboard app
        set_timeout(
            move || {
                if window().location().set_href("/app").is_err() {
                    set_loading.set(false);
                }
            },
            Duration::from_millis(SIGN_IN_DELAY_MS),
        );
    };

    let send_code = move |_| {
        if !forgot_email.get().trim().is_empty() {
            set_otp_stage.set(true);
        }
    };

    let verify_code = move |_| {
        if validate_otp(&otp.get()) {
            set_show_forgot.set(false);
            set_otp_stage.set(false);
            set_otp.set(String::new());
            set_otp_error.set(false);
        } else {
            set_otp_error.set(true);
        }
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-indigo-50 via-purple-50 to-white flex items-center justify-center px-4">
            <div class="w-full max-w-md">
                // Header
                <div class="text-center mb-8">
                    <a href="/" class="inline-block mb-6 text-6xl">"🦉"</a>
                    <h1 class="text-3xl font-bold text-gray-900 mb-2">"Welcome back"</h1>
                    <p class="text-gray-600">"Sign in to continue your learning journey"</p>
                </div>

                // Login form
                <div class="bg-white/90 backdrop-blur-sm border border-gray-200 rounded-2xl p-8 shadow-xl">
                    <form on:submit=on_submit class="space-y-6">
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
                            <div class="flex items-center justify-between">
                                <label class="text-sm font-medium text-gray-900">"Password"</label>
                                <button
                                    type="button"
                                    class="text-sm text-indigo-600 hover:text-indigo-800 font-medium"
                                    on:click=move |_| set_show_forgot.set(true)
                                >
                                    "Forgot Password?"
                                </button>
                            </div>
                            <input
                                type="password"
                                required
                                class="w-full h-12 px-4 rounded-xl border border-gray-300 bg-gray-50 focus:border-indigo-500 focus:ring-2 focus:ring-indigo-500 transition-all duration-200"
                                placeholder="Enter your password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                            />
                        </div>

                        <button
                            type="submit"
                            disabled=loading
                            class="w-full h-12 bg-indigo-600 hover:bg-indigo-700 disabled:opacity-60 text-white font-semibold rounded-xl shadow hover:shadow-lg transition-all duration-300"
                        >
                            {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>

                    // Divider
                    <div class="my-6 relative">
                        <div class="border-t border-gray-200"></div>
                        <span class="absolute left-1/2 -translate-x-1/2 -top-2.5 bg-white px-2 text-xs uppercase text-gray-500">
                            "Or continue with"
                        </span>
                    </div>

                    // Social sign-in (placeholder)
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
                            "Don't have an account? "
                            <a href="/signup" class="text-indigo-600 hover:text-indigo-800 font-semibold transition-colors duration-200">
                                "Sign up"
                            </a>
                        </p>
                    </div>
                </div>
            </div>

            // Forgot-password dialog
            <Show when=move || show_forgot.get()>
                <div class="fixed inset-0 z-50 bg-black/50 flex items-center justify-center px-4">
                    <div class="w-full max-w-md bg-white rounded-2xl p-6 shadow-2xl">
                        <div class="flex items-center justify-between mb-4">
                            <h2 class="text-lg font-bold text-gray-900">
                                {move || if otp_stage.get() { "Enter OTP" } else { "Forgot Password" }}
                            </h2>
                            <button
                                class="p-1 text-gray-500 hover:text-gray-900"
                                on:click=move |_| {
                                    set_show_forgot.set(false);
                                    set_otp_stage.set(false);
                                    set_otp_error.set(false);
                                }
                            >
                                "✕"
                            </button>
                        </div>

                        <Show
                            when=move || !otp_stage.get()
                            fallback=move || view! {
                                <div class="space-y-4">
                                    <p class="text-sm text-gray-600">
                                        "We sent a code to " {move || mask_email(&forgot_email.get())}
                                        ". (This demo accepts any 6-digit code.)"
                                    </p>
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
                                        <p class="text-sm text-red-600">"That doesn't look like a 6-digit code."</p>
                                    </Show>
                                    <button
                                        on:click=verify_code
                                        class="w-full h-12 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-xl"
                                    >
                                        "Verify OTP"
                                    </button>
                                </div>
                            }
                        >
                            <div class="space-y-4">
                                <div class="space-y-2">
                                    <label class="text-sm font-medium text-gray-900">"Email"</label>
                                    <input
                                        type="email"
                                        class="w-full h-12 px-4 rounded-xl border border-gray-300"
                                        placeholder="Enter your email"
                                        on:input=move |ev| set_forgot_email.set(event_target_value(&ev))
                                        prop:value=forgot_email
                                    />
                                </div>
                                <button
                                    on:click=send_code
                                    class="w-full h-12 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-xl"
                                >
                                    "Send OTP"
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}
