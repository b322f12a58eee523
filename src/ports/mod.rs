mod store_client;

pub use store_client::{
    CreateFolderRequest, DeleteRequest, StoreClient, UploadRequest, UploadResponse,
};
