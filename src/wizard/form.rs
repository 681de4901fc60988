// ABOUTME: The onboarding form aggregate and its value types
// Business identity, services with availability, photos, documents and preferences

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::schedule::WeeklySchedule;
use super::types::{ContactMethod, DocumentSlot, FieldUpdate, Service, TextField};

pub const DEFAULT_COUNTRY: &str = "USA";
pub const DEFAULT_RADIUS_MILES: u32 = 25;
pub const MAX_RADIUS_MILES: u32 = 100;
pub const DEFAULT_MAX_JOBS: &str = "5";

/// Minimum number of photos before the photos step can be left
pub const MIN_PHOTOS: usize = 3;

/// Ephemeral local reference to a picked photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRef {
    pub id: Uuid,
    pub source: PathBuf,
    pub file_name: String,
}

impl PhotoRef {
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            id: Uuid::new_v4(),
            source: path.to_path_buf(),
            file_name,
        }
    }
}

/// Display names of uploaded documents, one optional entry per fixed slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documents {
    pub insurance: Option<String>,
    pub license: Option<String>,
    pub tax: Option<String>,
    pub other: Option<String>,
}

impl Documents {
    pub fn get(&self, slot: DocumentSlot) -> Option<&str> {
        match slot {
            DocumentSlot::Insurance => self.insurance.as_deref(),
            DocumentSlot::License => self.license.as_deref(),
            DocumentSlot::Tax => self.tax.as_deref(),
            DocumentSlot::Other => self.other.as_deref(),
        }
    }

    pub fn set(&mut self, slot: DocumentSlot, file_name: String) {
        let entry = match slot {
            DocumentSlot::Insurance => &mut self.insurance,
            DocumentSlot::License => &mut self.license,
            DocumentSlot::Tax => &mut self.tax,
            DocumentSlot::Other => &mut self.other,
        };
        *entry = Some(file_name);
    }

    pub fn is_filled(&self, slot: DocumentSlot) -> bool {
        self.get(slot).is_some_and(|name| !name.is_empty())
    }

    /// All required slots have a file
    pub fn required_filled(&self) -> bool {
        DocumentSlot::all()
            .iter()
            .filter(|slot| slot.is_required())
            .all(|slot| self.is_filled(*slot))
    }
}

/// Full form data collected by the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardFormState {
    pub business_name: String,
    pub website: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    /// Service radius in miles
    pub radius: u32,
    /// Selected services in selection order, no duplicates
    pub services: Vec<Service>,
    /// May contain entries for services that were deselected later
    pub availability: BTreeMap<Service, WeeklySchedule>,
    /// First entry is the cover photo
    pub photos: Vec<PhotoRef>,
    pub documents: Documents,
    pub contact_method: ContactMethod,
    pub max_jobs: String,
    pub auto_accept: bool,
}

impl WizardFormState {
    pub fn new() -> Self {
        Self {
            business_name: String::new(),
            website: String::new(),
            email: String::new(),
            phone: String::new(),
            city: String::new(),
            state: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            zip_code: String::new(),
            radius: DEFAULT_RADIUS_MILES,
            services: Vec::new(),
            availability: BTreeMap::new(),
            photos: Vec::new(),
            documents: Documents::default(),
            contact_method: ContactMethod::default(),
            max_jobs: DEFAULT_MAX_JOBS.to_string(),
            auto_accept: false,
        }
    }

    /// Current value of a free-text field
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::BusinessName => &self.business_name,
            TextField::Website => &self.website,
            TextField::Email => &self.email,
            TextField::Phone => &self.phone,
            TextField::City => &self.city,
            TextField::ZipCode => &self.zip_code,
            TextField::MaxJobs => &self.max_jobs,
        }
    }

    /// Replace one top-level field
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::BusinessName(v) => self.business_name = v,
            FieldUpdate::Website(v) => self.website = v,
            FieldUpdate::Email(v) => self.email = v,
            FieldUpdate::Phone(v) => self.phone = v,
            FieldUpdate::City(v) => self.city = v,
            FieldUpdate::State(v) => self.state = v,
            FieldUpdate::Country(v) => self.country = v,
            FieldUpdate::ZipCode(v) => self.zip_code = v,
            FieldUpdate::Radius(v) => self.radius = v.min(MAX_RADIUS_MILES),
            FieldUpdate::ContactMethod(v) => self.contact_method = v,
            FieldUpdate::MaxJobs(v) => self.max_jobs = v,
            FieldUpdate::AutoAccept(v) => self.auto_accept = v,
        }
    }

    pub fn is_selected(&self, service: Service) -> bool {
        self.services.contains(&service)
    }

    /// Add or remove a service.
    ///
    /// Adding seeds the default week if the service has no schedule yet. Removing
    /// leaves any schedule in place, so a later re-add restores the edited one.
    pub fn toggle_service(&mut self, service: Service) {
        if self.is_selected(service) {
            self.services.retain(|s| *s != service);
        } else {
            self.services.push(service);
            self.availability
                .entry(service)
                .or_insert_with(WeeklySchedule::default_week);
        }
    }

    /// Schedule shown for a service, falling back to the default week
    pub fn schedule_for(&self, service: Service) -> WeeklySchedule {
        self.availability
            .get(&service)
            .cloned()
            .unwrap_or_default()
    }

    /// Required identity fields are all present
    pub fn basics_complete(&self) -> bool {
        [
            &self.business_name,
            &self.email,
            &self.phone,
            &self.city,
            &self.state,
            &self.country,
            &self.zip_code,
        ]
        .iter()
        .all(|v| !v.is_empty())
    }

    /// Number of placeholder tiles still shown on the photos step
    pub fn missing_photos(&self) -> usize {
        MIN_PHOTOS.saturating_sub(self.photos.len())
    }
}

impl Default for WizardFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::schedule::TimeField;

    #[test]
    fn test_new_form_defaults() {
        let form = WizardFormState::new();
        assert_eq!(form.country, "USA");
        assert_eq!(form.radius, 25);
        assert_eq!(form.max_jobs, "5");
        assert_eq!(form.contact_method, ContactMethod::Email);
        assert!(!form.auto_accept);
        assert!(form.services.is_empty());
        assert!(!form.basics_complete());
    }

    #[test]
    fn test_toggle_service_seeds_once() {
        let mut form = WizardFormState::new();
        form.toggle_service(Service::Plumber);
        assert_eq!(form.services, vec![Service::Plumber]);
        assert_eq!(
            form.availability.get(&Service::Plumber),
            Some(&WeeklySchedule::default_week())
        );

        let edited = form.schedule_for(Service::Plumber).with_time(0, TimeField::End, "20:00");
        form.availability.insert(Service::Plumber, edited.clone());

        form.toggle_service(Service::Plumber);
        assert!(form.services.is_empty());
        assert_eq!(form.availability.get(&Service::Plumber), Some(&edited));

        form.toggle_service(Service::Plumber);
        assert_eq!(form.availability.get(&Service::Plumber), Some(&edited));
    }

    #[test]
    fn test_toggle_preserves_selection_order() {
        let mut form = WizardFormState::new();
        form.toggle_service(Service::Roofing);
        form.toggle_service(Service::Hvac);
        form.toggle_service(Service::Towing);
        form.toggle_service(Service::Hvac);
        assert_eq!(form.services, vec![Service::Roofing, Service::Towing]);
    }

    #[test]
    fn test_documents_required() {
        let mut docs = Documents::default();
        docs.set(DocumentSlot::License, "license.pdf".into());
        assert!(!docs.required_filled());
        docs.set(DocumentSlot::Insurance, "coi.pdf".into());
        docs.set(DocumentSlot::Tax, "ein.pdf".into());
        assert!(docs.required_filled());
        assert_eq!(docs.get(DocumentSlot::Other), None);
    }

    #[test]
    fn test_radius_is_clamped() {
        let mut form = WizardFormState::new();
        form.apply(FieldUpdate::Radius(400));
        assert_eq!(form.radius, MAX_RADIUS_MILES);
    }

    #[test]
    fn test_photo_ref_uses_file_name() {
        let photo = PhotoRef::from_path(Path::new("/tmp/shop/front.jpg"));
        assert_eq!(photo.file_name, "front.jpg");
        assert_eq!(photo.source, Path::new("/tmp/shop/front.jpg"));
    }
}
