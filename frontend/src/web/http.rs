//! HTTP 请求封装模块
//!
//! 基于 `gloo-net` 实现核心库的 [`HttpClient`] 抽象。
//! 只有拿不到响应（网络失败、CORS 等）时才返回错误，状态码交给核心库判断。

use gloo_net::http::{Method, RequestBuilder};
use js_sys::{Array, Uint8Array};
use outpass::error::{PortalError, PortalResult};
use outpass::request::{FormPart, HttpBody, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

fn method_of(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Patch => Method::PATCH,
    }
}

fn js_error(context: &str, err: JsValue) -> PortalError {
    PortalError::Network(format!("{context}: {err:?}"))
}

/// 把表单字段转换为浏览器的 `FormData`
fn form_data(parts: &[FormPart]) -> PortalResult<FormData> {
    let form = FormData::new().map_err(|e| js_error("创建 FormData 失败", e))?;
    for part in parts {
        match part {
            FormPart::Text { name, value } => form
                .append_with_str(name, value)
                .map_err(|e| js_error("添加字段失败", e))?,
            FormPart::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                let chunks = Array::new();
                chunks.push(&Uint8Array::from(bytes.as_slice()));
                let options = BlobPropertyBag::new();
                options.set_type(content_type);
                let blob = Blob::new_with_u8_array_sequence_and_options(&chunks, &options)
                    .map_err(|e| js_error("创建 Blob 失败", e))?;
                form.append_with_blob_and_filename(name, &blob, file_name)
                    .map_err(|e| js_error("添加文件失败", e))?;
            }
        }
    }
    Ok(form)
}

/// 浏览器 fetch 客户端
#[derive(Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> PortalResult<HttpResponse> {
        let mut builder = RequestBuilder::new(&req.url).method(method_of(req.method));
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match &req.body {
            None => builder.build(),
            Some(HttpBody::Json(json)) => builder.body(JsValue::from_str(json)),
            Some(HttpBody::Multipart(parts)) => builder.body(form_data(parts)?),
        }
        .map_err(|e| PortalError::Network(format!("请求构建失败: {e}")))?;

        let response = request
            .send()
            .await
            .map_err(|e| PortalError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PortalError::Network(format!("读取响应失败: {e}")))?;

        Ok(HttpResponse { status, body })
    }
}
