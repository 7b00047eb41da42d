//! Project gallery with viewport-dependent page size and wraparound paging.

use gloo::events::EventListener;
use yew::prelude::*;

use hoshikuzu_core::catalog::{ProjectEntry, PROJECT_CATALOG};

use crate::i18n::I18n;

fn projects_per_page() -> usize {
    let Some(window) = web_sys::window() else {
        return 2;
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);
    if width < 600.0 {
        if height > 730.0 {
            2
        } else {
            1
        }
    } else {
        2
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ProjectsSectionProps {
    pub i18n: I18n,
}

#[function_component(ProjectsSection)]
pub(crate) fn projects_section(props: &ProjectsSectionProps) -> Html {
    let t = &props.i18n;
    let page = use_state_eq(|| 0usize);
    let per_page = use_state_eq(projects_per_page);
    let last_per_page = use_mut_ref(projects_per_page);

    {
        let per_page = per_page.clone();
        let page = page.clone();
        use_effect_with((), move |_| {
            let window: web_sys::EventTarget = match web_sys::window() {
                Some(window) => window.into(),
                None => return Box::new(|| {}) as Box<dyn FnOnce()>,
            };
            let listener = EventListener::new(&window, "resize", move |_| {
                let next = projects_per_page();
                if last_per_page.replace(next) != next {
                    per_page.set(next);
                    page.set(0);
                }
            });
            Box::new(move || drop(listener)) as Box<dyn FnOnce()>
        });
    }

    let total = PROJECT_CATALOG.len();
    let per = (*per_page).max(1);
    let total_pages = total.div_ceil(per).max(1);
    let current = (*page).min(total_pages - 1);
    let start = current * per;
    let visible: Vec<&'static ProjectEntry> =
        PROJECT_CATALOG.iter().skip(start).take(per).collect();

    let next_page = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            page.set((current + 1) % total_pages);
        })
    };
    let prev_page = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            page.set((current + total_pages - 1) % total_pages);
        })
    };

    html! {
        <section id="projects" class="section projects-section">
            <h2 class="section-title">{ t.text("projects.title") }</h2>
            <div class="projects-pager">
                <button class="pager-button" onclick={prev_page} aria-label="previous page">
                    { "‹" }
                </button>
                <div class="projects-grid">
                    { for visible.iter().map(|entry| html! {
                        <ProjectCard key={entry.slug} entry={*entry} i18n={t.clone()} />
                    }) }
                </div>
                <button class="pager-button" onclick={next_page} aria-label="next page">
                    { "›" }
                </button>
            </div>
            <div class="projects-dots">
                { for (0..total_pages).map(|index| {
                    let class = if index == current { "dot dot-active" } else { "dot" };
                    html! { <span class={class}></span> }
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    entry: &'static ProjectEntry,
    i18n: I18n,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let entry = props.entry;
    let t = &props.i18n;
    let title = t.text(&format!("projects.{}.title", entry.slug));
    let description = t.text(&format!("projects.{}.description", entry.slug));

    html! {
        <article class="project-card">
            <img class="project-image" src={entry.image} alt={title.clone()} loading="lazy" />
            <div class="project-body">
                <h3>{ title }</h3>
                <p>{ description }</p>
                <ul class="project-tech">
                    { for entry.tech.iter().map(|tech| html! { <li>{ *tech }</li> }) }
                </ul>
                <div class="project-links">
                    <a href={entry.github_url} target="_blank" rel="noopener noreferrer">
                        { t.text("projects.codeLink") }
                    </a>
                    <a href={entry.live_url} target="_blank" rel="noopener noreferrer">
                        { t.text("projects.liveLink") }
                    </a>
                </div>
            </div>
        </article>
    }
}
