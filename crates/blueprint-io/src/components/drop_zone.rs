//! Drop-zone component with drag-and-drop and a file picker.

use blueprint_intake::{
    AcceptListener, FileIntake, IntakeConfig, IntakeEvent, IntakeFile, format_megabytes,
};
use dioxus::html::HasFileData;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCircleCheck, LdFileImage, LdUpload, LdX};

use crate::console;
use crate::picked::PickedFile;
use crate::toast::{Toaster, use_toaster};

/// Format hint shown under the heading.
const FORMATS_HINT: &str = "or click to browse \u{2022} PDF, PNG, JPG, DWG, DXF";

/// Forwards accepts to the embedder's optional handler.
struct Embedder(Option<EventHandler<PickedFile>>);

impl AcceptListener<PickedFile> for Embedder {
    fn on_accept(&mut self, file: &PickedFile) {
        if let Some(handler) = self.0 {
            handler.call(file.clone());
        }
    }
}

type Intake = FileIntake<PickedFile, Embedder, Toaster>;

/// Heading for the empty drop-zone.
const fn headline(hovering: bool) -> &'static str {
    if hovering {
        "Release to upload"
    } else {
        "Drop your blueprint here"
    }
}

/// Props for the [`DropZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DropZoneProps {
    /// Picker filter and acknowledgment text. The acknowledgment text is
    /// read on first render only; later changes keep the original message.
    #[props(default)]
    config: IntakeConfig,
    /// Called once with the first file of every accepted drop or
    /// picker selection.
    on_accept: Option<EventHandler<PickedFile>>,
}

/// A drag-and-drop zone with a file picker.
///
/// Holds at most one file. While empty it shows the intake prompt,
/// highlighted while a drag hovers; once a file is accepted it shows the
/// file's name and size with a button to clear it. Every accept calls
/// `on_accept` and shows a success toast through the enclosing
/// [`ToastHost`](crate::ToastHost).
///
/// The `accept` filter only narrows the picker. Drops outside it are
/// still accepted, with a console warning.
#[component]
pub fn DropZone(props: DropZoneProps) -> Element {
    let toaster = use_toaster();
    let intake = use_signal(|| {
        FileIntake::new(
            Embedder(props.on_accept),
            toaster,
            props.config.success_message.clone(),
        )
    });

    let accept = props.config.accept.clone();
    let accept_attr = accept.to_string();

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        let files = PickedFile::from_payload(evt.files());
        if let Some(first) = files.first()
            && !accept.permits(first.name(), first.content_type())
        {
            console::warn(&format!(
                "Accepting {} although it is outside the picker filter ({accept})",
                first.name()
            ));
        }
        dispatch(intake, IntakeEvent::Drop(files));
    };

    let handle_files = move |evt: FormEvent| {
        dispatch(
            intake,
            IntakeEvent::PickerChange(PickedFile::from_payload(evt.files())),
        );
    };

    let hovering = intake.read().is_hovering();
    let accepted = intake
        .read()
        .file()
        .map(|f| (f.name().to_owned(), format_megabytes(f.size())));

    let title = headline(hovering);
    let zone_class = if hovering {
        "bp-dropzone bp-dropzone--hover"
    } else {
        "bp-dropzone"
    };
    let tile_class = if hovering {
        "bp-dropzone__tile bp-dropzone__tile--hover"
    } else {
        "bp-dropzone__tile"
    };

    rsx! {
        div { class: "bp-intake",
            div {
                class: "{zone_class}",
                ondragenter: move |evt| {
                    evt.prevent_default();
                    dispatch(intake, IntakeEvent::DragEnter);
                },
                ondragover: move |evt| {
                    evt.prevent_default();
                    dispatch(intake, IntakeEvent::DragOver);
                },
                ondragleave: move |evt| {
                    evt.prevent_default();
                    dispatch(intake, IntakeEvent::DragLeave);
                },
                ondrop: handle_drop,

                // Animated border, visible only while hovering.
                div { class: "bp-dropzone__shimmer" }

                div { class: "bp-dropzone__body",
                    if let Some((ref name, ref size)) = accepted {
                        div { class: "bp-file",
                            div { class: "bp-file__info",
                                div { class: "bp-file__icon",
                                    Icon { icon: LdFileImage, width: 32, height: 32 }
                                }
                                div {
                                    p { class: "bp-file__name", "{name}" }
                                    p { class: "bp-file__size", "{size}" }
                                }
                            }
                            div { class: "bp-file__actions",
                                span { class: "bp-file__ok",
                                    Icon { icon: LdCircleCheck, width: 24, height: 24 }
                                }
                                button {
                                    class: "bp-file__clear",
                                    aria_label: "Clear file",
                                    onclick: move |_| dispatch(intake, IntakeEvent::Clear),
                                    Icon { icon: LdX, width: 20, height: 20 }
                                }
                            }
                        }
                    } else {
                        label { class: "bp-picker",
                            input {
                                r#type: "file",
                                class: "bp-hidden",
                                accept: "{accept_attr}",
                                onchange: handle_files,
                            }
                            div { class: "bp-picker__content",
                                div { class: "{tile_class}",
                                    Icon { icon: LdUpload, width: 48, height: 48 }
                                }
                                div { class: "bp-picker__text",
                                    h3 { class: "bp-picker__title", "{title}" }
                                    p { class: "bp-picker__hint", "{FORMATS_HINT}" }
                                }
                                div { class: "bp-corner bp-corner--tl" }
                                div { class: "bp-corner bp-corner--tr" }
                                div { class: "bp-corner bp-corner--bl" }
                                div { class: "bp-corner bp-corner--br" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Run one event through the intake held in `intake`.
fn dispatch(mut intake: Signal<Intake>, event: IntakeEvent<PickedFile>) {
    intake.write().handle(event);
}
