/// 外部链接处理
pub trait LinkOpener {
    /// 打开链接，不关心结果
    fn open(&mut self, url: &str);
}

/// 使用系统默认浏览器打开链接
#[derive(Debug, Default)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&mut self, url: &str) {
        tracing::info!(url, "opening link");
        if let Err(error) = open::that_detached(url) {
            tracing::warn!(url, %error, "failed to open link");
        }
    }
}

/// 记录被打开的链接，仅用于测试
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct RecordingLinkOpener {
    pub opened: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
}

#[cfg(test)]
impl LinkOpener for RecordingLinkOpener {
    fn open(&mut self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}
