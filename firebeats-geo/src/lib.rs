pub mod beat;
