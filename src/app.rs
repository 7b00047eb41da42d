//! Page shell: scroll-snap sections composed with the animated background.

use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use hoshikuzu_core::catalog::SKILL_CATALOG;

use crate::background::{AnimatedBackground, BackgroundConfig, EngineHandle};
use crate::contact::ContactSection;
use crate::i18n::{persist_lang, resolve_lang, I18n, Lang, LANGS};
use crate::projects::ProjectsSection;
use crate::typewriter::TypewriterText;

#[function_component(App)]
pub(crate) fn app() -> Html {
    let lang = use_state_eq(resolve_lang);
    let i18n = use_memo(*lang, |lang| I18n::load(*lang));

    let on_lang = {
        let lang = lang.clone();
        Callback::from(move |next: Lang| {
            persist_lang(next);
            lang.set(next);
        })
    };

    html! {
        <main class="snap-container">
            <header class="site-header">
                <span class="site-mark">{ "hoshikuzu" }</span>
                <LangSelector current={i18n.lang()} on_select={on_lang} />
            </header>
            <HeroSection i18n={(*i18n).clone()} />
            <AboutSection i18n={(*i18n).clone()} />
            <SkillsSection i18n={(*i18n).clone()} />
            <ProjectsSection i18n={(*i18n).clone()} />
            <ContactSection i18n={(*i18n).clone()} />
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    i18n: I18n,
}

#[function_component(HeroSection)]
fn hero_section(props: &SectionProps) -> Html {
    let t = &props.i18n;
    let engine = use_memo((), |_| EngineHandle::new());
    let motion_paused = use_state(|| false);

    let on_toggle_motion = {
        let engine = engine.clone();
        let motion_paused = motion_paused.clone();
        Callback::from(move |_: MouseEvent| {
            if engine.is_stopped() {
                engine.start();
                motion_paused.set(false);
            } else {
                engine.stop();
                motion_paused.set(true);
            }
        })
    };

    let motion_label = if *motion_paused {
        t.text("hero.motionResume")
    } else {
        t.text("hero.motionPause")
    };

    html! {
        <section id="home" class="section hero-section">
            <AnimatedBackground
                config={BackgroundConfig::default()}
                handle={Some((*engine).clone())}
            />
            <div class="hero-content">
                <h1 class="hero-title">{ t.text("hero.greeting") }</h1>
                <h2 class="hero-subtitle">
                    { t.text("hero.iAmA") }{ " " }
                    <TypewriterText phrases={t.list("hero.roles")} />
                </h2>
                <p class="hero-intro">{ t.text("hero.intro") }</p>
            </div>
            <button class="motion-toggle" onclick={on_toggle_motion}>
                { motion_label }
            </button>
            <ScrollDownIndicator target_id="about" />
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section(props: &SectionProps) -> Html {
    let t = &props.i18n;
    html! {
        <section id="about" class="section about-section">
            <h2 class="section-title">{ t.text("about.title") }</h2>
            <p class="about-text">{ t.text("about.body") }</p>
        </section>
    }
}

#[function_component(SkillsSection)]
fn skills_section(props: &SectionProps) -> Html {
    let t = &props.i18n;
    html! {
        <section id="skills" class="section skills-section">
            <h2 class="section-title">{ t.text("skills.title") }</h2>
            <div class="skills-grid">
                { for SKILL_CATALOG.iter().map(|skill| html! {
                    <SkillCard key={skill.name} name={skill.name} icon={skill.icon} />
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    name: &'static str,
    icon: &'static str,
}

/// Hover state lives in the card; the icon child only receives a `flipped`
/// prop, never an imperative handle.
#[function_component(SkillCard)]
fn skill_card(props: &SkillCardProps) -> Html {
    let hovered = use_state_eq(|| false);
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <div class="skill-card" {onmouseenter} {onmouseleave} title={props.name}>
            <SkillIcon icon={props.icon} name={props.name} flipped={*hovered} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SkillIconProps {
    icon: &'static str,
    name: &'static str,
    flipped: bool,
}

#[function_component(SkillIcon)]
fn skill_icon(props: &SkillIconProps) -> Html {
    let class = if props.flipped {
        "skill-icon skill-icon-flipped"
    } else {
        "skill-icon"
    };
    html! {
        <img
            class={class}
            src={format!("/icons/tech/{}", props.icon)}
            alt={props.name}
            loading="lazy"
        />
    }
}

#[derive(Properties, PartialEq)]
struct ScrollDownIndicatorProps {
    target_id: &'static str,
}

#[function_component(ScrollDownIndicator)]
fn scroll_down_indicator(props: &ScrollDownIndicatorProps) -> Html {
    let target_id = props.target_id;
    let onclick = Callback::from(move |_: MouseEvent| {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        if let Some(element) = document.get_element_by_id(target_id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    html! {
        <button class="scroll-down" {onclick} aria-label="scroll down">
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1"
                stroke-linecap="round" stroke-linejoin="round" width="32" height="32">
                <path d="M7 7l5 5l5 -5" />
                <path d="M7 13l5 5l5 -5" />
            </svg>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct LangSelectorProps {
    current: Lang,
    on_select: Callback<Lang>,
}

#[function_component(LangSelector)]
fn lang_selector(props: &LangSelectorProps) -> Html {
    let open = use_state_eq(|| false);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    // Any click outside the dropdown closes it.
    {
        let open = open.clone();
        use_effect_with(*open, move |is_open| {
            if !*is_open {
                return Box::new(|| {}) as Box<dyn FnOnce()>;
            }
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return Box::new(|| {}) as Box<dyn FnOnce()>;
            };
            let listener = gloo::events::EventListener::new(
                &document,
                "mousedown",
                move |event: &web_sys::Event| {
                    let outside = event
                        .target()
                        .and_then(|target| target.dyn_into::<Element>().ok())
                        .map_or(true, |element| element.closest(".lang-selector").ok().flatten().is_none());
                    if outside {
                        open.set(false);
                    }
                },
            );
            Box::new(move || drop(listener)) as Box<dyn FnOnce()>
        });
    }

    let options = LANGS.iter().map(|&option| {
        let on_select = props.on_select.clone();
        let open = open.clone();
        let selected = option == props.current;
        let onclick = Callback::from(move |_: MouseEvent| {
            open.set(false);
            on_select.emit(option);
        });
        let class = if selected {
            "lang-option lang-option-selected"
        } else {
            "lang-option"
        };
        html! {
            <button key={option.as_str()} class={class} role="option"
                aria-selected={selected.to_string()} {onclick}>
                { option.label() }
            </button>
        }
    });

    html! {
        <div class="lang-selector">
            <button class="lang-toggle" onclick={toggle} aria-expanded={open.to_string()}
                aria-haspopup="listbox">
                { props.current.as_str().to_uppercase() }
            </button>
            if *open {
                <div class="lang-dropdown" role="listbox">
                    { for options }
                </div>
            }
        </div>
    }
}
