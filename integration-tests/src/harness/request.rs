use http::Request;

/// A bodiless request with the given method, URI and headers.
pub fn request(method: &str, uri: &str, headers: &[(&str, &str)]) -> Request<()> {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(()).expect("invalid test request")
}

pub fn get(uri: &str, headers: &[(&str, &str)]) -> Request<()> {
    request("GET", uri, headers)
}
