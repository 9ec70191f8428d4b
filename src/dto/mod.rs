pub mod advertisements;
