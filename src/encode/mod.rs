pub(crate) mod image_file;
