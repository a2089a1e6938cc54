use super::payload::MultipartPayload;
use contracts::domain::a001_orphanage::{fields, CreateOrphanageRequest, GeoPoint, ABOUT_MAX_CHARS};
use contracts::shared::validation::ValidationRules;

/// Route opened after a successful registration
pub const LISTING_ROUTE: &str = "/app";
/// Alert shown once the backend accepted the form
pub const SUCCESS_MESSAGE: &str = "cadastro finalizado com sucesso!";

const NAME_RULES: ValidationRules = ValidationRules::required();
const ABOUT_RULES: ValidationRules = ValidationRules::none().with_max_length(ABOUT_MAX_CHARS);

/// Classes of the "Sim" and "Não" buttons; only the chosen one is highlighted
pub fn weekend_button_classes(open_on_weekends: bool) -> (&'static str, &'static str) {
    if open_on_weekends {
        ("active", "")
    } else {
        ("", "active-no")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Done,
}

/// What the page does once the request has settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Navigate(&'static str),
    StayOnForm,
}

/// State of the "create orphanage" form.
///
/// `I` is a selected image: it carries the file handle and its preview, so
/// previews always line up with the images one to one.
#[derive(Debug)]
pub struct OrphanageForm<I> {
    position: Option<GeoPoint>,
    name: String,
    about: String,
    instructions: String,
    opening_hours: String,
    open_on_weekends: bool,
    images: Vec<I>,
    phase: SubmitPhase,
    error: Option<String>,
}

impl<I> Default for OrphanageForm<I> {
    fn default() -> Self {
        Self {
            position: None,
            name: String::new(),
            about: String::new(),
            instructions: String::new(),
            opening_hours: String::new(),
            open_on_weekends: true,
            images: Vec::new(),
            phase: SubmitPhase::Editing,
            error: None,
        }
    }
}

impl<I> OrphanageForm<I> {
    pub fn position(&self) -> Option<GeoPoint> {
        self.position
    }

    /// Replace the picked point; only one point is kept
    pub fn set_position(&mut self, point: GeoPoint) {
        self.position = Some(point);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, value: String) {
        self.name = value;
    }

    pub fn about(&self) -> &str {
        &self.about
    }

    /// Keeps at most [`ABOUT_MAX_CHARS`] characters
    pub fn set_about(&mut self, value: String) {
        self.about = match value.char_indices().nth(ABOUT_MAX_CHARS) {
            Some((cut, _)) => value[..cut].to_string(),
            None => value,
        };
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn set_instructions(&mut self, value: String) {
        self.instructions = value;
    }

    pub fn opening_hours(&self) -> &str {
        &self.opening_hours
    }

    pub fn set_opening_hours(&mut self, value: String) {
        self.opening_hours = value;
    }

    pub fn open_on_weekends(&self) -> bool {
        self.open_on_weekends
    }

    pub fn set_open_on_weekends(&mut self, value: bool) {
        self.open_on_weekends = value;
    }

    pub fn images(&self) -> &[I] {
        &self.images
    }

    /// Replace the selection with `images`.
    ///
    /// An empty selection is ignored and the previous images stay. Returns
    /// whether the selection changed.
    pub fn select_images(&mut self, images: Vec<I>) -> bool {
        if images.is_empty() {
            return false;
        }
        self.images = images;
        true
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn validate(&self) -> Result<(), String> {
        NAME_RULES.validate_string(&self.name, "Nome")?;
        ABOUT_RULES.validate_string(&self.about, "Sobre")?;
        Ok(())
    }

    /// Text fields of the request. An unpicked position is sent as `(0, 0)`.
    pub fn to_request(&self) -> CreateOrphanageRequest {
        let position = self.position.unwrap_or_default();
        CreateOrphanageRequest {
            name: self.name.clone(),
            about: self.about.clone(),
            latitude: position.latitude,
            longitude: position.longitude,
            instructions: self.instructions.clone(),
            opening_hours: self.opening_hours.clone(),
            open_on_weekends: self.open_on_weekends,
        }
    }

    /// Text fields followed by one `images` part per selected image
    pub fn to_payload(&self) -> MultipartPayload<'_, I> {
        let mut payload = MultipartPayload::new();
        for (name, value) in self.to_request().text_fields() {
            payload.push_text(name, value);
        }
        for image in &self.images {
            payload.push_file(fields::IMAGES, image);
        }
        payload
    }

    /// Move to `Submitting` if the form may be sent.
    ///
    /// A form that is already being sent (or was sent) is rejected without
    /// touching the error; a validation failure is stored in `error`.
    pub fn begin_submit(&mut self) -> Result<(), String> {
        match self.phase {
            SubmitPhase::Submitting => return Err("envio em andamento".to_string()),
            SubmitPhase::Done => return Err("formulário já enviado".to_string()),
            SubmitPhase::Editing => {}
        }
        if let Err(e) = self.validate() {
            self.error = Some(e.clone());
            return Err(e);
        }
        self.error = None;
        self.phase = SubmitPhase::Submitting;
        Ok(())
    }

    /// Apply the result of the request
    pub fn complete_submit(&mut self, result: Result<(), String>) -> SubmitOutcome {
        match result {
            Ok(()) => {
                self.phase = SubmitPhase::Done;
                SubmitOutcome::Navigate(LISTING_ROUTE)
            }
            Err(e) => {
                self.phase = SubmitPhase::Editing;
                self.error = Some(format!("Erro ao cadastrar orfanato: {}", e));
                SubmitOutcome::StayOnForm
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct FakeImage(&'static str);

    fn form() -> OrphanageForm<FakeImage> {
        OrphanageForm::default()
    }

    #[test]
    fn test_defaults() {
        let f = form();
        assert_eq!(f.position(), None);
        assert!(f.open_on_weekends());
        assert!(f.images().is_empty());
        assert_eq!(f.phase(), SubmitPhase::Editing);
        assert_eq!(f.error(), None);
    }

    #[test]
    fn test_position_is_last_pick() {
        let mut f = form();
        f.set_position(GeoPoint::new(-5.1152628, -42.7759954));
        f.set_position(GeoPoint::new(0.0, 0.0));
        f.set_position(GeoPoint::new(-5.123456789012, -42.987654321098));
        assert_eq!(
            f.position(),
            Some(GeoPoint::new(-5.123456789012, -42.987654321098))
        );
    }

    #[test]
    fn test_equator_prime_meridian_is_a_real_pick() {
        let mut f = form();
        f.set_position(GeoPoint::new(0.0, 0.0));
        assert_eq!(f.position(), Some(GeoPoint::new(0.0, 0.0)));
    }

    #[test]
    fn test_select_images_replaces_previous() {
        let mut f = form();
        assert!(f.select_images(vec![FakeImage("a"), FakeImage("b"), FakeImage("c")]));
        assert_eq!(f.images().len(), 3);

        assert!(f.select_images(vec![FakeImage("d"), FakeImage("e")]));
        assert_eq!(f.images(), &[FakeImage("d"), FakeImage("e")]);
    }

    #[test]
    fn test_empty_selection_is_ignored() {
        let mut f = form();
        f.select_images(vec![FakeImage("a")]);
        assert!(!f.select_images(Vec::new()));
        assert_eq!(f.images(), &[FakeImage("a")]);
    }

    #[test]
    fn test_weekend_toggle_is_idempotent() {
        let mut f = form();
        f.set_open_on_weekends(false);
        f.set_open_on_weekends(true);
        f.set_open_on_weekends(true);
        assert!(f.open_on_weekends());
        f.set_open_on_weekends(false);
        f.set_open_on_weekends(false);
        assert!(!f.open_on_weekends());
    }

    #[test]
    fn test_only_chosen_weekend_button_is_active() {
        let mut f = form();
        f.set_open_on_weekends(true);
        f.set_open_on_weekends(true);
        assert_eq!(weekend_button_classes(f.open_on_weekends()), ("active", ""));

        f.set_open_on_weekends(false);
        assert_eq!(weekend_button_classes(f.open_on_weekends()), ("", "active-no"));
    }

    #[test]
    fn test_about_is_truncated_to_limit() {
        let mut f = form();
        f.set_about("é".repeat(ABOUT_MAX_CHARS + 10));
        assert_eq!(f.about().chars().count(), ABOUT_MAX_CHARS);

        f.set_about("curto".to_string());
        assert_eq!(f.about(), "curto");
    }

    #[test]
    fn test_unset_position_submits_zero() {
        let mut f = form();
        f.set_name("Lar".to_string());
        let payload = f.to_payload();
        assert_eq!(payload.text("latitude"), Some("0"));
        assert_eq!(payload.text("longitude"), Some("0"));
    }

    #[test]
    fn test_payload_contents() {
        let mut f = form();
        f.set_name("Shelter A".to_string());
        f.set_about("desc".to_string());
        f.set_position(GeoPoint::new(-5.1, -42.7));
        f.set_open_on_weekends(false);
        f.select_images(vec![FakeImage("first.jpg"), FakeImage("second.jpg")]);

        let payload = f.to_payload();
        assert_eq!(
            payload.names(),
            vec![
                "name",
                "about",
                "latitude",
                "longitude",
                "instructions",
                "opening_hours",
                "open_on_weekends",
                "images",
                "images",
            ]
        );
        assert_eq!(payload.text("name"), Some("Shelter A"));
        assert_eq!(payload.text("about"), Some("desc"));
        assert_eq!(payload.text("latitude"), Some("-5.1"));
        assert_eq!(payload.text("longitude"), Some("-42.7"));
        assert_eq!(payload.text("instructions"), Some(""));
        assert_eq!(payload.text("opening_hours"), Some(""));
        assert_eq!(payload.text("open_on_weekends"), Some("false"));
        assert_eq!(
            payload.files("images"),
            vec![&FakeImage("first.jpg"), &FakeImage("second.jpg")]
        );
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut f = form();
        f.set_name("   ".to_string());
        assert!(f.begin_submit().is_err());
        assert_eq!(f.phase(), SubmitPhase::Editing);
        assert_eq!(f.error(), Some("Nome é obrigatório"));
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut f = form();
        f.set_name("Lar".to_string());
        assert!(f.begin_submit().is_ok());
        assert!(f.is_submitting());
        assert!(f.begin_submit().is_err());
        assert_eq!(f.error(), None);
        assert!(f.is_submitting());
    }

    #[test]
    fn test_success_navigates_to_listing() {
        let mut f = form();
        f.set_name("Lar".to_string());
        f.begin_submit().unwrap();
        assert_eq!(f.complete_submit(Ok(())), SubmitOutcome::Navigate("/app"));
        assert_eq!(SUCCESS_MESSAGE, "cadastro finalizado com sucesso!");
        assert_eq!(f.phase(), SubmitPhase::Done);
        assert!(f.begin_submit().is_err());
    }

    #[test]
    fn test_failure_stays_on_form() {
        let mut f = form();
        f.set_name("Lar".to_string());
        f.select_images(vec![FakeImage("a")]);
        f.begin_submit().unwrap();

        let outcome = f.complete_submit(Err("HTTP 500".to_string()));
        assert_eq!(outcome, SubmitOutcome::StayOnForm);
        assert_eq!(f.phase(), SubmitPhase::Editing);
        assert_eq!(f.error(), Some("Erro ao cadastrar orfanato: HTTP 500"));
        // the form keeps its data and can be sent again
        assert_eq!(f.name(), "Lar");
        assert_eq!(f.images().len(), 1);
        assert!(f.begin_submit().is_ok());
        assert_eq!(f.error(), None);
    }
}
