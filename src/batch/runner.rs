//! # 批量执行器
//!
//! 并行执行批量处理任务。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代（结果顺序与输入一致）
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::utils::progress;

use rayon::prelude::*;

/// 单个任务处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult<T> {
    /// 处理成功
    Success(T),
    /// 处理失败
    Failed(String, String), // (任务名称, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug)]
pub struct BatchResult<T> {
    /// 成功结果（保持输入顺序）
    pub successes: Vec<T>,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl<T> Default for BatchResult<T> {
    fn default() -> Self {
        Self {
            successes: Vec::new(),
            failed: 0,
            failures: Vec::new(),
        }
    }
}

impl<T> BatchResult<T> {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult<T>) {
        match result {
            ProcessResult::Success(value) => self.successes.push(value),
            ProcessResult::Failed(name, err) => {
                self.failed += 1;
                self.failures.push((name, err));
            }
        }
    }

    /// 成功数量
    pub fn success(&self) -> usize {
        self.successes.len()
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success() + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
    /// 是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 表示使用全部 CPU 核心）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            jobs,
            show_progress: true,
        }
    }

    /// 关闭进度条（测试或非交互场景）
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理任务列表
    pub fn run<I, T, F>(&self, items: Vec<I>, processor: F) -> BatchResult<T>
    where
        I: Sync,
        T: Send,
        F: Fn(&I) -> ProcessResult<T> + Sync + Send,
    {
        let total = items.len();
        let pb = if self.show_progress {
            progress::create_progress_bar(total as u64, "Processing")
        } else {
            indicatif::ProgressBar::hidden()
        };

        let work = || -> Vec<ProcessResult<T>> {
            items
                .par_iter()
                .map(|item| {
                    let result = processor(item);
                    pb.inc(1);
                    result
                })
                .collect()
        };

        // 配置 rayon 线程池，失败时退回全局线程池
        let results = match rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
        {
            Ok(pool) => pool.install(work),
            Err(e) => {
                log::warn!("failed to build thread pool ({}), using global pool", e);
                work()
            }
        };

        pb.finish_and_clear();

        // 汇总结果
        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        batch_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_preserves_order() {
        let runner = BatchRunner::new(4).quiet();
        let items: Vec<u32> = (0..100).collect();
        let result = runner.run(items, |x| ProcessResult::Success(x * 2));

        assert_eq!(result.success(), 100);
        assert_eq!(result.successes[0], 0);
        assert_eq!(result.successes[99], 198);
        assert!(result.successes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_run_collects_failures() {
        let runner = BatchRunner::new(2).quiet();
        let items: Vec<i32> = vec![1, -2, 3, -4];
        let result = runner.run(items, |&x| {
            if x > 0 {
                ProcessResult::Success(x)
            } else {
                ProcessResult::Failed(x.to_string(), "negative".to_string())
            }
        });

        assert_eq!(result.successes, vec![1, 3]);
        assert_eq!(result.failed, 2);
        assert_eq!(result.total(), 4);
        assert_eq!(result.failures[0].0, "-2");
        assert_eq!(result.failures[1].0, "-4");
    }

    #[test]
    fn test_auto_jobs() {
        assert!(BatchRunner::new(0).jobs() >= 1);
        assert_eq!(BatchRunner::new(3).jobs(), 3);
    }
}
