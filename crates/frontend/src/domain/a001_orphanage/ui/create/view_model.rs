//! Create Orphanage - View Model

use super::model::{self, SelectedImage};
use super::state::{OrphanageForm, SubmitOutcome, SUCCESS_MESSAGE};
use contracts::domain::a001_orphanage::GeoPoint;
use leptos::prelude::*;

/// ViewModel for the create form.
///
/// The whole form lives in one local signal: file handles are not `Send`.
#[derive(Clone, Copy)]
pub struct CreateOrphanageVm {
    pub form: RwSignal<OrphanageForm<SelectedImage>, LocalStorage>,
}

impl CreateOrphanageVm {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new_local(OrphanageForm::default()),
        }
    }

    pub fn pick_position(&self, point: GeoPoint) {
        log::debug!("map pick: {}, {}", point.latitude, point.longitude);
        self.form.update(|f| f.set_position(point));
    }

    pub fn preview_urls(&self) -> Vec<String> {
        self.form.with(|f| {
            f.images()
                .iter()
                .map(|img| img.preview_url().to_string())
                .collect()
        })
    }

    /// Handle a change of the file picker
    pub fn select_images_command(&self, files: Option<web_sys::FileList>) {
        let Some(files) = files else {
            log::debug!("file picker returned no file list");
            return;
        };

        let images = match model::selected_images(&files) {
            Ok(images) => images,
            Err(e) => {
                log::error!("failed to read selected images: {}", e);
                self.form
                    .update(|f| f.set_error(format!("Erro ao carregar imagens: {}", e)));
                return;
            }
        };

        let count = images.len();
        let mut replaced = false;
        self.form.update(|f| replaced = f.select_images(images));
        if replaced {
            log::info!("{} image(s) selected", count);
        } else {
            log::debug!("empty file selection ignored");
        }
    }

    /// Validate, send the form and navigate on success.
    ///
    /// `navigate` is only called after the request succeeded.
    pub fn submit_command<N>(&self, url: String, navigate: N)
    where
        N: Fn(&str) + 'static,
    {
        let form = self.form;

        let mut started = Ok(());
        form.update(|f| started = f.begin_submit());
        if let Err(reason) = started {
            log::warn!("submit rejected: {}", reason);
            return;
        }

        let body = form.with_untracked(|f| model::to_form_data(&f.to_payload()));
        let body = match body {
            Ok(body) => body,
            Err(e) => {
                log::error!("failed to build form data: {}", e);
                form.update(|f| {
                    f.complete_submit(Err(e));
                });
                return;
            }
        };

        log::info!("POST {}", url);
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::create_orphanage(&url, body).await;
            if let Err(e) = &result {
                log::error!("orphanage registration failed: {}", e);
            }

            // None: the page was left while the request was in flight
            let Some(outcome) = form.try_update(|f| f.complete_submit(result)) else {
                return;
            };

            match outcome {
                SubmitOutcome::Navigate(route) => {
                    web_sys::window().and_then(|w| w.alert_with_message(SUCCESS_MESSAGE).ok());
                    log::info!("orphanage registered, navigating to {}", route);
                    navigate(route);
                }
                SubmitOutcome::StayOnForm => {}
            }
        });
    }
}

impl Default for CreateOrphanageVm {
    fn default() -> Self {
        Self::new()
    }
}
