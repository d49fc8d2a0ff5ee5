//! Reusable UI components

pub mod building_form;
pub mod building_table;
pub mod dialog;
pub mod fields;
pub mod loading;
pub mod maintenance_form;
pub mod maintenance_table;
pub mod owner_form;
pub mod owner_table;
pub mod register_form;
pub mod tenant_form;
pub mod tenant_table;

pub use building_form::BuildingForm;
pub use building_table::BuildingTable;
pub use dialog::Dialog;
pub use fields::{SelectField, TextField};
pub use loading::LoadingSpinner;
pub use maintenance_form::MaintenanceForm;
pub use maintenance_table::MaintenanceTable;
pub use owner_form::OwnerForm;
pub use owner_table::OwnerTable;
pub use register_form::RegisterForm;
pub use tenant_form::TenantForm;
pub use tenant_table::TenantTable;
