mod delete_profile;
mod update_profile;
