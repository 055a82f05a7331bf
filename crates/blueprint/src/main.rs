use blueprint_intake::{IntakeConfig, IntakeFile};
use blueprint_io::{DropZone, PickedFile, ToastHost, console};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdLayers;

/// Feature bullets under the drop-zone.
const FEATURES: [&str; 3] = ["Auto-detect layers", "Export to CAD", "AI measurements"];

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Static landing page around a single [`DropZone`]. The page only logs
/// accepted files; the drop-zone shows its own toast.
fn app() -> Element {
    let config = use_hook(IntakeConfig::default);

    let on_accept = move |file: PickedFile| {
        console::log(&format!("File uploaded: {}", file.name()));
    };

    rsx! {
        // Page styles, embedded so the binary needs no asset pipeline.
        style { dangerous_inner_html: include_str!("../assets/blueprint.css") }

        ToastHost { duration_ms: config.toast_duration_ms,
            div { class: "bp-page",
                // Ambient glow
                div { class: "bp-glow bp-glow--left" }
                div { class: "bp-glow bp-glow--right" }

                div { class: "bp-container",
                    header { class: "bp-header bp-fade-up",
                        div { class: "bp-brand",
                            div { class: "bp-brand__mark",
                                Icon { icon: LdLayers, width: 32, height: 32 }
                            }
                            span { class: "bp-brand__name",
                                "Blueprint"
                                span { class: "bp-accent", "Pro" }
                            }
                        }
                    }

                    main { class: "bp-main",
                        div { class: "bp-hero bp-fade-up",
                            h1 { class: "bp-hero__title",
                                span { "Process Your " }
                                span { class: "bp-accent bp-glow-text", "Blueprints" }
                            }
                            p { class: "bp-hero__tagline",
                                "Upload architectural drawings and let our AI extract, analyze, and transform your designs."
                            }
                        }

                        div { class: "bp-fade-up-delay bp-full",
                            DropZone {
                                config: config.clone(),
                                on_accept: on_accept,
                            }
                        }

                        ul { class: "bp-features bp-fade-up-delay",
                            for feature in FEATURES {
                                li { key: "{feature}", class: "bp-feature",
                                    span { class: "bp-feature__dot" }
                                    "{feature}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
