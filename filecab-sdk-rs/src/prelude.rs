pub use filecab_types::{
	auth::AuthToken,
	fs::{Entry, EntryId},
};

pub use crate::{
	auth::{
		auth_config, check_token,
		http::{ApiClient, AuthClient, UnauthClient},
	},
	error::Error,
	fs::{
		dir::{create_dir, delete_dir, list_dir, rename_dir},
		file::{delete_file, download_file, get_file, rename_file, upload_file},
	},
};
