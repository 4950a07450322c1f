mod hooks;
mod observer;
mod sections;

use std::rc::Rc;

use serde_json::json;
use web_sys::{window, Storage};
use yew::prelude::*;

use crate::content::Content;
use crate::telemetry::{log_event, parse_log_level, set_min_level, LogLevel, DEFAULT_LOG_LEVEL, LOG_LEVEL_KEY};
use sections::{About, Banner, Experience, Footer, Header, Leadership, Projects, SectionProps, Skills};

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn read_stored_log_level() -> LogLevel {
    let stored = local_storage().and_then(|storage| storage.get_item(LOG_LEVEL_KEY).ok().flatten());
    parse_log_level(stored.as_deref(), DEFAULT_LOG_LEVEL)
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub(crate) fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

#[function_component(App)]
fn app(props: &SectionProps) -> Html {
    let reduced_motion = use_state(prefers_reduced_motion);

    {
        let reduced_motion = *reduced_motion;
        use_effect_with((), move |_| {
            if reduced_motion {
                log_event(LogLevel::Info, "reduced_motion_detected", json!({}));
            }
            || ()
        });
    }

    let content = props.content.clone();

    html! {
        <main class="page">
            <Header content={content.clone()} />
            <Banner content={content.clone()} reduced_motion={*reduced_motion} />
            <About content={content.clone()} />
            <Skills content={content.clone()} />
            <Experience content={content.clone()} />
            <Projects content={content.clone()} />
            <Leadership content={content.clone()} />
            <Footer {content} />
        </main>
    }
}

pub fn run() {
    set_min_level(read_stored_log_level());

    let content = match Content::load() {
        Ok(content) => Rc::new(content),
        Err(error) => {
            log_event(
                LogLevel::Error,
                "content_invalid",
                json!({ "error": error.to_string() }),
            );
            return;
        }
    };

    let (width, height) = viewport_size();
    log_event(
        LogLevel::Info,
        "app_mounted",
        json!({
            "viewportWidth": width,
            "viewportHeight": height,
            "projects": content.site.projects.len(),
        }),
    );

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        SectionProps { content },
    )
    .render();
}
