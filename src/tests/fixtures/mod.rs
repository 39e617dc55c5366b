pub mod note_info;
