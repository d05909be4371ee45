pub mod family_data;
