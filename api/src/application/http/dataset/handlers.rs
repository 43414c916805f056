pub mod get_dataset_status;
