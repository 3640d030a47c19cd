//! LocalStorage 封装模块
//!
//! 会话的三个键以纯字符串保存（不经过 JSON 编码），与服务端页面共用同一份存储。

use gloo_storage::{LocalStorage as GlooStorage, Storage};

pub struct LocalStorage;

impl LocalStorage {
    /// 键不存在或存储不可用时返回 None
    pub fn get(key: &str) -> Option<String> {
        GlooStorage::raw().get_item(key).ok()?
    }

    /// 设置存储值，返回是否成功
    pub fn set(key: &str, value: &str) -> bool {
        GlooStorage::raw().set_item(key, value).is_ok()
    }

    /// 删除存储的键值对，返回是否成功
    pub fn delete(key: &str) -> bool {
        GlooStorage::raw().remove_item(key).is_ok()
    }
}
