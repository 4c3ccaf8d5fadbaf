pub mod chef_control;
pub mod home;
pub mod menu;
