// crates/dg_workflow/src/config.rs

//! 计算器配置

/// 计算器配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// 线程池线程数 (0 = rayon 默认)
    pub num_threads: usize,
    /// 后台线程名称
    pub thread_name: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            num_threads: 0,
            thread_name: "dg-calculator".into(),
        }
    }
}

impl CalculatorConfig {
    /// 设置线程数
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// 设置后台线程名称
    pub fn with_thread_name(mut self, thread_name: impl Into<String>) -> Self {
        self.thread_name = thread_name.into();
        self
    }
}
