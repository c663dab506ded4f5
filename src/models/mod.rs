pub mod appointment;
pub mod doctor;
pub mod greetings;
pub mod hospital;
pub mod intent;

pub use appointment::{Appointment, AppointmentStatus, Slot};
pub use doctor::Doctor;
pub use greetings::GreetingSet;
pub use hospital::HospitalContact;
pub use intent::{ClassifiedIntent, Intent};
