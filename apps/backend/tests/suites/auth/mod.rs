mod extractor_auth;
mod password;
mod token_codec;
