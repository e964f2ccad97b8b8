//! Landing page component
//!
//! One template for both locales: the skeleton (section order, anchors,
//! navigation targets) comes from `core::document`, every visible string
//! from the mounted locale's table. Sections:
//! - Navigation with language switcher and mobile menu
//! - Hero with headline stats
//! - Problem, solution, testimonial and manifesto
//! - Cost comparison and the development story
//! - Dual call to action and footer

use leptos::prelude::*;

use crate::core::document::{DESKTOP_NAV, MOBILE_NAV, NavLink, links};
use crate::core::{Anchor, Locale, Messages, SECTION_ORDER, SectionKind};
use crate::ui::icon::{Icon, icons};
use crate::ui::locale::{LocaleContext, use_locale_context};
use crate::ui::reveal::Reveal;

/// Problem cards: icon, title key, body key
const PROBLEMS: [(&str, &str, &str); 3] = [
    (icons::ALERT_TRIANGLE, "problem-chaos-title", "problem-chaos-body"),
    (icons::USERS, "problem-wall-title", "problem-wall-body"),
    (icons::BAR_CHART, "problem-blind-title", "problem-blind-body"),
];

/// Solution rows: icon, title key, body key
const SOLUTIONS: [(&str, &str, &str); 3] = [
    (icons::ZAP, "solution-autopilot-title", "solution-autopilot-body"),
    (icons::LOCK, "solution-entry-title", "solution-entry-body"),
    (icons::BAR_CHART, "solution-clarity-title", "solution-clarity-body"),
];

/// Cost comparison columns: message key prefix, highlighted
const COST_COLUMNS: [(&str, bool); 3] = [
    ("story-hiring", false),
    ("story-freelance", false),
    ("story-ai", true),
];

const AI_DID: [&str; 6] = [
    "story-ai-did-1",
    "story-ai-did-2",
    "story-ai-did-3",
    "story-ai-did-4",
    "story-ai-did-5",
    "story-ai-did-6",
];

const HUMAN_DID: [(&str, &str); 4] = [
    ("🎯", "story-human-did-1"),
    ("🎨", "story-human-did-2"),
    ("🔍", "story-human-did-3"),
    ("✅", "story-human-did-4"),
];

fn section_id(kind: SectionKind) -> Option<&'static str> {
    kind.anchor().map(|anchor| anchor.id())
}

/// Landing page for the mounted locale
#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_locale_context();
    let m = ctx.messages();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-emerald-50 via-slate-50 to-teal-50 text-gray-900 overflow-x-hidden">
            {SECTION_ORDER
                .into_iter()
                .map(|kind| render_section(kind, ctx, m))
                .collect_view()}
        </div>
    }
}

fn render_section(kind: SectionKind, ctx: LocaleContext, m: Messages) -> AnyView {
    match kind {
        SectionKind::Navigation => view! { <Navigation ctx=ctx m=m /> }.into_any(),
        SectionKind::Hero => view! { <Hero m=m /> }.into_any(),
        SectionKind::Problem => view! { <Problem m=m /> }.into_any(),
        SectionKind::Solution => view! { <Solution m=m /> }.into_any(),
        SectionKind::Testimonial => view! { <Testimonial m=m /> }.into_any(),
        SectionKind::Manifesto => view! { <Manifesto m=m /> }.into_any(),
        SectionKind::Statistics => view! { <Statistics m=m /> }.into_any(),
        SectionKind::DevelopmentStory => view! { <DevelopmentStory m=m /> }.into_any(),
        SectionKind::DualCta => view! { <DualCta m=m /> }.into_any(),
        SectionKind::Footer => view! { <Footer m=m /> }.into_any(),
    }
}

/// Navigation bar with mobile menu support
#[component]
fn Navigation(ctx: LocaleContext, m: Messages) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-white/80 backdrop-blur-lg border-b border-emerald-100/50 shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <div class="flex items-center gap-2 landing-slide-in-left">
                        <Icon name=icons::DATABASE class="w-8 h-8" />
                        <span class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-emerald-900 to-teal-700">
                            {m.t("brand-name")}
                        </span>
                    </div>

                    // Desktop Navigation
                    <div class="hidden md:flex items-center gap-8">
                        {DESKTOP_NAV
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.anchor.href()
                                        class="text-gray-700 hover:text-emerald-600 transition-colors"
                                    >
                                        {m.t(link.label)}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex items-center gap-4">
                        <div class="hidden md:flex">
                            <LanguageSwitcher ctx=ctx m=m compact=true />
                        </div>

                        <a
                            href=Anchor::Download.href()
                            class="hidden md:block bg-gradient-to-r from-emerald-600 to-teal-600 hover:from-emerald-700 hover:to-teal-700
                                   text-white px-6 py-2 rounded-lg font-medium transition-all shadow-lg whitespace-nowrap landing-slide-in-right"
                        >
                            {m.t("nav-download")}
                        </a>

                        // Mobile menu button
                        <button
                            type="button"
                            class="md:hidden text-gray-900 hover:text-emerald-600 transition-colors"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            aria-label=m.t("nav-toggle-menu")
                            aria-expanded=move || menu_open.get().to_string()
                        >
                            {move || {
                                if menu_open.get() {
                                    view! { <Icon name=icons::X class="w-6 h-6" /> }
                                } else {
                                    view! { <Icon name=icons::MENU class="w-6 h-6" /> }
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || menu_open.get()>
                <div class="md:hidden absolute top-16 left-0 right-0 bg-white shadow-xl border-t border-gray-100 landing-drop-in">
                    <div class="px-4 py-4 space-y-3">
                        <LanguageSwitcher ctx=ctx m=m compact=false />
                        {MOBILE_NAV
                            .into_iter()
                            .map(|link| mobile_link(link, m, set_menu_open))
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

fn mobile_link(link: NavLink, m: Messages, set_menu_open: WriteSignal<bool>) -> impl IntoView {
    let class = if link.anchor == Anchor::Download {
        "block bg-gradient-to-r from-emerald-600 to-teal-600 hover:from-emerald-700 hover:to-teal-700 text-white
         px-6 py-3 rounded-lg font-medium transition-all shadow-lg text-center"
    } else {
        "block text-gray-600 hover:text-emerald-600 hover:bg-emerald-50 px-4 py-3 rounded-lg transition-colors"
    };

    view! {
        <a href=link.anchor.href() class=class on:click=move |_| set_menu_open.set(false)>
            {m.t(link.label)}
        </a>
    }
}

/// Flag buttons; the mounted locale is highlighted
#[component]
fn LanguageSwitcher(ctx: LocaleContext, m: Messages, compact: bool) -> impl IntoView {
    let current = m.locale();
    let size = if compact {
        "px-3 py-1.5 text-lg"
    } else {
        "flex-1 px-3 py-2 text-xl"
    };

    view! {
        <div
            class="flex items-center gap-2 bg-emerald-50/80 backdrop-blur-sm border border-emerald-200/50 rounded-lg p-1"
            role="group"
            aria-label=m.t("nav-language")
        >
            {Locale::ALL
                .into_iter()
                .map(|locale| {
                    let active = locale == current;
                    let state = if active {
                        "bg-emerald-600 text-white"
                    } else {
                        "text-gray-700 hover:bg-white/80"
                    };
                    let label = match locale {
                        Locale::En => m.t("nav-switch-en"),
                        Locale::Ru => m.t("nav-switch-ru"),
                    };

                    view! {
                        <button
                            type="button"
                            class=format!("rounded font-medium transition-all {size} {state}")
                            aria-label=label
                            aria-pressed=active.to_string()
                            on:click=move |_| ctx.switch(locale)
                        >
                            {locale.flag()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Hero(m: Messages) -> impl IntoView {
    view! {
        <section class="pt-32 pb-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="landing-fade-in-up">
                        <h1 class="text-5xl md:text-6xl font-bold mb-6 leading-tight">
                            <span class="bg-clip-text text-transparent bg-gradient-to-r from-emerald-900 to-teal-700">
                                {m.t("hero-title")}
                            </span>
                            <br />
                            <span class="text-red-600">{m.t("hero-title-accent")}</span>
                        </h1>
                        <p class="text-xl text-slate-700 mb-8 leading-relaxed">{m.t("hero-lead")}</p>

                        <div class="flex flex-wrap gap-4">
                            <a href=Anchor::Download.href() class="landing-btn-primary">
                                <Icon name=icons::DOWNLOAD class="w-5 h-5 brightness-0 invert" />
                                {m.t("hero-cta-download")}
                            </a>
                            <a href=Anchor::Master.href() class="landing-btn-secondary">
                                <Icon name=icons::SPARKLES />
                                {m.t("hero-cta-more")}
                            </a>
                        </div>
                    </div>

                    <div class="relative landing-fade-in-up landing-delay-200">
                        <div class="bg-white/80 backdrop-blur-sm border border-emerald-100/50 rounded-2xl p-8 shadow-2xl">
                            <div class="space-y-6">
                                <HeroStat
                                    icon=icons::TRENDING_UP
                                    label=m.t("hero-stat-students")
                                    value=m.t("hero-stat-students-value")
                                />
                                <HeroStat
                                    icon=icons::BAR_CHART
                                    label=m.t("hero-stat-conversion")
                                    value=m.t("hero-stat-conversion-value")
                                />
                                <HeroStat
                                    icon=icons::CHECK_CIRCLE
                                    label=m.t("hero-stat-funnel")
                                    value=m.t("hero-stat-funnel-value")
                                />
                            </div>
                        </div>
                        // Background decoration
                        <div
                            class="absolute -z-10 inset-0 bg-gradient-to-r from-emerald-400 to-teal-400 rounded-2xl blur-3xl opacity-20"
                            aria-hidden="true"
                        ></div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn HeroStat(icon: &'static str, label: String, value: String) -> impl IntoView {
    view! {
        <div class="bg-emerald-50/80 backdrop-blur-sm rounded-lg p-6 border border-emerald-200/50">
            <div class="flex items-center justify-between mb-2">
                <span class="text-gray-700">{label}</span>
                <Icon name=icon />
            </div>
            <div class="text-4xl font-bold text-emerald-600">{value}</div>
        </div>
    }
}

#[component]
fn Problem(m: Messages) -> impl IntoView {
    view! {
        <section class="py-20 px-4 sm:px-6 lg:px-8 bg-white/40">
            <div class="max-w-7xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900">{m.t("problem-heading")}</h2>
                </Reveal>

                <div class="grid md:grid-cols-3 gap-8">
                    {PROBLEMS
                        .into_iter()
                        .enumerate()
                        .map(|(index, (icon, title, body))| {
                            view! {
                                <Reveal
                                    class="bg-white/80 backdrop-blur-sm border border-red-100 rounded-xl p-8 shadow-lg hover:shadow-xl transition-shadow"
                                    delay_ms={index as u32 * 100}
                                >
                                    <div class="w-14 h-14 bg-red-50 rounded-lg flex items-center justify-center mb-6">
                                        <Icon name=icon class="w-7 h-7" />
                                    </div>
                                    <h3 class="text-2xl font-bold mb-4 text-gray-900">{m.t(title)}</h3>
                                    <p class="text-slate-600 leading-relaxed">{m.t(body)}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Solution(m: Messages) -> impl IntoView {
    view! {
        <section id=section_id(SectionKind::Solution) class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-emerald-900 to-teal-700">
                        {m.t("solution-heading")}
                    </h2>
                </Reveal>

                <div class="space-y-24">
                    {SOLUTIONS
                        .into_iter()
                        .enumerate()
                        .map(|(index, (icon, title, body))| {
                            // Every other row puts the illustration first
                            let (text_order, art_order) = if index % 2 == 1 {
                                ("md:order-2", "md:order-1")
                            } else {
                                ("", "")
                            };
                            view! {
                                <Reveal class="grid md:grid-cols-2 gap-12 items-center">
                                    <div class=text_order>
                                        <div class="w-16 h-16 bg-gradient-to-br from-emerald-500 to-teal-500 rounded-xl flex items-center justify-center mb-6 shadow-lg">
                                            <Icon name=icon class="w-8 h-8 brightness-0 invert" />
                                        </div>
                                        <h3 class="text-3xl font-bold mb-4 text-gray-900">{m.t(title)}</h3>
                                        <p class="text-lg text-slate-700 leading-relaxed">{m.t(body)}</p>
                                    </div>
                                    <div class=art_order>
                                        <div class="bg-gradient-to-br from-emerald-500 to-teal-600 rounded-2xl p-8 shadow-2xl aspect-[4/3] flex items-center justify-center">
                                            <SolutionIllustration variant=index />
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Decorative animated diagram next to each solution
#[component]
fn SolutionIllustration(variant: usize) -> impl IntoView {
    match variant {
        0 => view! {
            // Landing pages routed to courses
            <svg class="w-full h-full" viewBox="0 0 400 300" fill="none" aria-hidden="true">
                <line x1="110" y1="150" x2="170" y2="95" stroke="rgba(255,255,255,0.6)" stroke-width="3" stroke-linecap="round" />
                <line x1="110" y1="150" x2="170" y2="205" stroke="rgba(255,255,255,0.6)" stroke-width="3" stroke-linecap="round" />
                <line x1="230" y1="95" x2="290" y2="140" stroke="rgba(255,255,255,0.6)" stroke-width="3" stroke-linecap="round" />
                <line x1="230" y1="205" x2="290" y2="160" stroke="rgba(255,255,255,0.6)" stroke-width="3" stroke-linecap="round" />
                <circle cx="80" cy="150" r="30" fill="rgba(255,255,255,0.2)" stroke="rgba(255,255,255,0.4)" stroke-width="2" />
                <circle cx="200" cy="80" r="35" fill="rgba(255,255,255,0.25)" stroke="rgba(255,255,255,0.5)" stroke-width="2" />
                <circle cx="200" cy="220" r="35" fill="rgba(255,255,255,0.25)" stroke="rgba(255,255,255,0.5)" stroke-width="2" />
                <circle cx="320" cy="150" r="30" fill="rgba(255,255,255,0.2)" stroke="rgba(255,255,255,0.4)" stroke-width="2" />
                <circle cx="80" cy="150" r="40" fill="none" stroke="rgba(255,255,255,0.15)" stroke-width="1">
                    <animate attributeName="r" from="40" to="60" dur="2s" repeatCount="indefinite" />
                    <animate attributeName="opacity" from="0.3" to="0" dur="2s" repeatCount="indefinite" />
                </circle>
                <circle cx="320" cy="150" r="40" fill="none" stroke="rgba(255,255,255,0.15)" stroke-width="1">
                    <animate attributeName="r" from="40" to="60" dur="2s" begin="1s" repeatCount="indefinite" />
                    <animate attributeName="opacity" from="0.3" to="0" dur="2s" begin="1s" repeatCount="indefinite" />
                </circle>
            </svg>
        }
        .into_any(),
        1 => view! {
            // One-click entry
            <svg class="w-full h-full" viewBox="0 0 400 300" fill="none" aria-hidden="true">
                <path
                    d="M 100 150 Q 100 50, 200 50 Q 300 50, 300 150 Q 300 250, 200 250 Q 100 250, 100 150"
                    fill="rgba(255,255,255,0.15)"
                    stroke="rgba(255,255,255,0.4)"
                    stroke-width="3"
                />
                <rect x="180" y="120" width="40" height="80" rx="20" fill="rgba(255,255,255,0.25)" stroke="rgba(255,255,255,0.5)" stroke-width="2" />
                <circle cx="200" cy="145" r="8" fill="white" opacity="0.9" />
                <circle cx="130" cy="150" r="6" fill="white" opacity="0.7">
                    <animate attributeName="cx" from="130" to="250" dur="3s" repeatCount="indefinite" />
                </circle>
                <circle cx="110" cy="160" r="5" fill="white" opacity="0.6">
                    <animate attributeName="cx" from="110" to="260" dur="3.5s" repeatCount="indefinite" />
                </circle>
            </svg>
        }
        .into_any(),
        _ => view! {
            // Analytics dashboard
            <svg class="w-full h-full" viewBox="0 0 400 300" fill="none" aria-hidden="true">
                <line x1="80" y1="80" x2="200" y2="150" stroke="rgba(255,255,255,0.3)" stroke-width="1" stroke-dasharray="2,2" />
                <line x1="120" y1="100" x2="200" y2="150" stroke="rgba(255,255,255,0.3)" stroke-width="1" stroke-dasharray="2,2" />
                <line x1="140" y1="70" x2="200" y2="150" stroke="rgba(255,255,255,0.3)" stroke-width="1" stroke-dasharray="2,2" />
                <circle cx="80" cy="80" r="4" fill="rgba(255,255,255,0.4)" />
                <circle cx="120" cy="100" r="4" fill="rgba(255,255,255,0.4)" />
                <circle cx="140" cy="70" r="4" fill="rgba(255,255,255,0.4)" />
                <rect x="160" y="130" width="80" height="60" rx="8" fill="rgba(255,255,255,0.25)" stroke="rgba(255,255,255,0.5)" stroke-width="2" />
                <rect x="170" y="145" width="20" height="35" rx="2" fill="white" opacity="0.6" />
                <rect x="195" y="155" width="20" height="25" rx="2" fill="white" opacity="0.7" />
                <rect x="220" y="150" width="10" height="30" rx="2" fill="white" opacity="0.8" />
                <circle cx="200" cy="150" r="50" fill="none" stroke="rgba(255,255,255,0.15)" stroke-width="2">
                    <animate attributeName="r" from="50" to="80" dur="3s" repeatCount="indefinite" />
                    <animate attributeName="opacity" from="0.4" to="0" dur="3s" repeatCount="indefinite" />
                </circle>
            </svg>
        }
        .into_any(),
    }
}

#[component]
fn Testimonial(m: Messages) -> impl IntoView {
    view! {
        <section id=section_id(SectionKind::Testimonial) class="py-20 px-4 sm:px-6 lg:px-8 bg-white/40">
            <div class="max-w-4xl mx-auto">
                <Reveal class="relative bg-gradient-to-br from-emerald-600 to-teal-600 rounded-2xl p-12 shadow-2xl">
                    <div class="absolute top-6 left-8 text-8xl leading-none text-white/20 font-serif" aria-hidden="true">
                        "\u{201C}"
                    </div>
                    <blockquote class="relative">
                        <p class="text-2xl md:text-3xl text-white leading-relaxed mb-8">
                            {m.t("testimonial-quote")}
                        </p>
                        <footer class="flex items-center gap-4">
                            <div class="w-14 h-14 bg-white/20 rounded-full flex items-center justify-center">
                                <Icon name=icons::USERS class="w-7 h-7 brightness-0 invert" />
                            </div>
                            <div>
                                <div class="font-semibold text-white text-lg">{m.t("testimonial-author")}</div>
                                <div class="text-emerald-100">{m.t("testimonial-role")}</div>
                            </div>
                        </footer>
                    </blockquote>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Manifesto(m: Messages) -> impl IntoView {
    view! {
        <section id=section_id(SectionKind::Manifesto) class="py-24 px-4 sm:px-6 lg:px-8">
            <div class="max-w-4xl mx-auto">
                <Reveal class="text-center">
                    <div class="flex justify-center mb-8">
                        <Icon name=icons::SPARKLES class="w-16 h-16" />
                    </div>
                    <p class="text-3xl md:text-4xl font-bold text-gray-900 mb-8">{m.t("manifesto-lead")}</p>
                    <div class="space-y-4 text-xl md:text-2xl text-slate-700">
                        <p>{m.t("manifesto-point")}</p>
                        <p class="font-semibold text-emerald-700">{m.t("manifesto-claim")}</p>
                        <p>{m.t("manifesto-mindset")}</p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Statistics(m: Messages) -> impl IntoView {
    view! {
        <section id=section_id(SectionKind::Statistics) class="py-20 px-4 sm:px-6 lg:px-8 bg-white/40">
            <div class="max-w-5xl mx-auto">
                <Reveal class="bg-emerald-50/80 border border-emerald-200/50 rounded-2xl p-8 mb-16">
                    <p class="text-xl text-slate-700 leading-relaxed text-center">
                        {m.t("stats-role-lead")} " "
                        <span class="font-bold text-emerald-700">{m.t("stats-role-highlight")}</span>
                        " " {m.t("stats-role-tail")} " "
                        <span class="font-bold text-gray-900">{m.t("stats-role-result")}</span>
                    </p>
                </Reveal>

                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">{m.t("stats-heading")}</h2>
                    <p class="text-xl text-slate-700">
                        {m.t("stats-lead")} " "
                        <span class="font-bold text-red-600">{m.t("stats-lead-accent")}</span>
                    </p>
                </Reveal>

                <div class="grid grid-cols-2 gap-8 items-end max-w-3xl mx-auto">
                    <CostBar
                        cost=m.t("stats-team-cost")
                        meta=m.t("stats-team-meta")
                        label=m.t("stats-team-label")
                        height_px=300
                        highlight=false
                        delay_ms=0
                    />
                    <CostBar
                        cost=m.t("stats-ai-cost")
                        meta=m.t("stats-ai-meta")
                        label=m.t("stats-ai-label")
                        height_px=10
                        highlight=true
                        delay_ms=300
                    />
                </div>
            </div>
        </section>
    }
}

/// Bar that grows to `height_px` when revealed
#[component]
fn CostBar(
    cost: String,
    meta: String,
    label: String,
    height_px: u32,
    highlight: bool,
    delay_ms: u32,
) -> impl IntoView {
    let (bar, text) = if highlight {
        ("from-emerald-500 to-teal-500", "text-emerald-600")
    } else {
        ("from-red-500 to-red-400", "text-red-600")
    };

    view! {
        <div class="flex flex-col items-center">
            <div class="text-center mb-4">
                <div class=format!("text-3xl md:text-4xl font-bold {text}")>{cost}</div>
                <div class="text-sm text-slate-600">{meta}</div>
            </div>
            <Reveal class="w-full flex items-end justify-center h-[300px]">
                <div
                    class=format!("landing-bar w-24 rounded-t-lg bg-gradient-to-t {bar}")
                    style=format!("--bar-height: {height_px}px; transition-delay: {delay_ms}ms;")
                ></div>
            </Reveal>
            <div class="mt-4 font-semibold text-gray-900 text-center">{label}</div>
        </div>
    }
}

#[component]
fn DevelopmentStory(m: Messages) -> impl IntoView {
    view! {
        <section class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-12">
                    <h2 class="text-4xl md:text-5xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-emerald-900 to-teal-700 mb-6">
                        {m.t("story-heading")}
                    </h2>
                    <p class="text-xl text-slate-700 max-w-3xl mx-auto">
                        {m.t("story-lead-before")} " "
                        <span class="font-bold text-emerald-700">{m.t("story-lead-hours")}</span>
                        " " {m.t("story-lead-after")}
                    </p>
                </Reveal>

                <Reveal class="bg-white/80 backdrop-blur-sm border border-emerald-100/50 rounded-2xl p-8 shadow-xl mb-12">
                    <h3 class="text-2xl font-bold text-center mb-8 text-gray-900">{m.t("story-cost-heading")}</h3>
                    <div class="grid md:grid-cols-3 gap-6">
                        {COST_COLUMNS
                            .into_iter()
                            .map(|(prefix, highlight)| {
                                let card = if highlight {
                                    "bg-gradient-to-br from-emerald-500 to-teal-500 text-white shadow-lg"
                                } else {
                                    "bg-slate-50 text-gray-900 border border-slate-200"
                                };
                                view! {
                                    <div class=format!("rounded-xl p-6 {card}")>
                                        <h4 class="text-xl font-bold mb-4">{m.t(&format!("{prefix}-title"))}</h4>
                                        <div class="space-y-2">
                                            <p>
                                                <span class="font-semibold">{m.t("story-label-time")}</span>
                                                " " {m.t(&format!("{prefix}-time"))}
                                            </p>
                                            <p>
                                                <span class="font-semibold">{m.t("story-label-cost")}</span>
                                                " " {m.t(&format!("{prefix}-cost"))}
                                            </p>
                                            <p>
                                                <span class="font-semibold">{m.t("story-label-team")}</span>
                                                " " {m.t(&format!("{prefix}-team"))}
                                            </p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <p class="text-center text-lg font-semibold text-emerald-700 mt-8">{m.t("story-savings")}</p>
                </Reveal>

                <div class="grid md:grid-cols-2 gap-8 mb-12">
                    <Reveal class="bg-white/80 border border-emerald-100/50 rounded-2xl p-8 shadow-lg">
                        <h4 class="flex items-center gap-2 text-xl font-bold mb-6 text-gray-900">
                            <Icon name=icons::CHECK_CIRCLE class="w-6 h-6" />
                            {m.t("story-ai-did-heading")}
                        </h4>
                        <ul class="space-y-3">
                            {AI_DID
                                .into_iter()
                                .map(|key| {
                                    view! {
                                        <li class="flex items-start gap-3">
                                            <Icon name=icons::CHECK_CIRCLE class="w-5 h-5 mt-0.5 flex-shrink-0" />
                                            <span class="text-slate-700">{m.t(key)}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Reveal>

                    <Reveal class="bg-white/80 border border-emerald-100/50 rounded-2xl p-8 shadow-lg" delay_ms=150>
                        <h4 class="flex items-center gap-2 text-xl font-bold mb-6 text-gray-900">
                            <Icon name=icons::USERS class="w-6 h-6" />
                            {m.t("story-human-did-heading")}
                        </h4>
                        <ul class="space-y-3">
                            {HUMAN_DID
                                .into_iter()
                                .map(|(marker, key)| {
                                    view! {
                                        <li class="flex items-start gap-3">
                                            <span class="text-xl" aria-hidden="true">{marker}</span>
                                            <span class="text-slate-700">{m.t(key)}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Reveal>
                </div>

                <Reveal class="text-center">
                    <p class="text-xl text-slate-700 max-w-3xl mx-auto">
                        {m.t("story-closing")} " "
                        <span class="font-bold text-emerald-700">{m.t("story-closing-accent")}</span>
                    </p>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn DualCta(m: Messages) -> impl IntoView {
    view! {
        <section id=section_id(SectionKind::DualCta) class="py-20 px-4 sm:px-6 lg:px-8 bg-white/40">
            <div class="max-w-7xl mx-auto grid md:grid-cols-2 gap-8">
                // Plugin card
                <Reveal class="bg-white/80 backdrop-blur-sm border border-emerald-100/50 rounded-2xl p-10 shadow-xl">
                    <Icon name=icons::DOWNLOAD class="w-12 h-12 mb-6" />
                    <h3 class="text-3xl font-bold mb-2 text-gray-900">{m.t("cta-tool-heading")}</h3>
                    <h4 class="text-xl font-semibold text-emerald-700 mb-4">{m.t("cta-tool-title")}</h4>
                    <p class="text-slate-700 mb-8 leading-relaxed">{m.t("cta-tool-body")}</p>
                    <a href=links::PLUGIN_DOWNLOAD_URL class="landing-btn-primary w-full justify-center">
                        <Icon name=icons::DOWNLOAD class="w-5 h-5 brightness-0 invert" />
                        {m.t("cta-tool-button")}
                    </a>
                </Reveal>

                // Course card
                <Reveal
                    id=Anchor::Master.id()
                    class="bg-gradient-to-br from-emerald-600 to-teal-600 rounded-2xl p-10 shadow-2xl text-white"
                    delay_ms=150
                >
                    <Icon name=icons::SPARKLES class="w-12 h-12 mb-6 brightness-0 invert" />
                    <h3 class="text-3xl font-bold mb-2">{m.t("cta-course-heading")}</h3>
                    <h4 class="text-xl font-semibold text-emerald-100 mb-4">{m.t("cta-course-title")}</h4>
                    <p class="text-emerald-50 mb-8 leading-relaxed">{m.t("cta-course-body")}</p>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <button
                            type="button"
                            class="flex-1 bg-white text-emerald-700 hover:bg-emerald-50 px-6 py-3 rounded-lg font-semibold
                                   transition-all flex items-center justify-center gap-2 shadow-lg"
                        >
                            <Icon name=icons::ARROW_RIGHT />
                            {m.t("cta-course-trial")}
                        </button>
                        <button
                            type="button"
                            class="flex-1 border-2 border-white text-white hover:bg-white/10 px-6 py-3 rounded-lg font-semibold
                                   transition-all flex items-center justify-center gap-2"
                        >
                            <Icon name=icons::BOOK_OPEN class="w-5 h-5 brightness-0 invert" />
                            {m.t("cta-course-curriculum")}
                        </button>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Footer(m: Messages) -> impl IntoView {
    view! {
        <footer class="py-12 px-4 sm:px-6 lg:px-8 border-t border-emerald-100/50 bg-white/60">
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row items-center justify-between gap-6">
                <div class="flex items-center gap-2">
                    <Icon name=icons::DATABASE class="w-6 h-6" />
                    <span class="font-bold text-gray-900">{m.t("brand-name")}</span>
                </div>

                <div class="flex items-center gap-6 text-slate-600">
                    <a
                        href=links::GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 hover:text-emerald-600 transition-colors"
                    >
                        <Icon name=icons::GITHUB />
                        {m.t("footer-github")}
                    </a>
                    <a
                        href=links::DOCS_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 hover:text-emerald-600 transition-colors"
                    >
                        <Icon name=icons::BOOK_OPEN />
                        {m.t("footer-docs")}
                    </a>
                    <a href=Anchor::Master.href() class="flex items-center gap-2 hover:text-emerald-600 transition-colors">
                        <Icon name=icons::SPARKLES />
                        {m.t("footer-course")}
                    </a>
                </div>

                <div class="text-sm text-slate-500">
                    {m.t("footer-built-with")} " "
                    <span class="font-semibold text-emerald-700">{m.t("footer-vibe")}</span>
                </div>
            </div>
        </footer>
    }
}
