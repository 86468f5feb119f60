//! # 文件收集器
//!
//! 根据输入路径和通配模式收集待处理的计算输出文件。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - glob 模式匹配（逗号分隔多模式）
//! - 递归目录搜索
//!
//! ## 依赖关系
//! - 被 `commands.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `glob` 进行文件名匹配

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入路径（文件或目录）
    input: PathBuf,
    /// 文件名匹配模式；为空时匹配所有文件
    patterns: Vec<Pattern>,
    /// 是否递归子目录
    recursive: bool,
}

impl FileCollector {
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: Vec::new(),
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔，如 "*.log,*.out"）；非法模式被忽略
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.patterns = pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| Pattern::new(s).ok())
            .collect();
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Vec<PathBuf> {
        if self.input.is_file() {
            return vec![self.input.clone()];
        }

        if !self.input.is_dir() {
            return vec![];
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        WalkDir::new(&self.input)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect()
    }

    /// 检查文件名是否匹配任一模式
    fn matches(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return true;
        }

        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => self.patterns.iter().any(|p| p.matches(name)),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    #[test]
    fn test_collect_matching_files() {
        let dir = std::env::temp_dir().join("uvspec_collector_test");
        fs::create_dir_all(&dir).unwrap();
        File::create(dir.join("a.log")).unwrap();
        File::create(dir.join("b.out")).unwrap();
        File::create(dir.join("c.chk")).unwrap();

        let files = FileCollector::new(dir.clone())
            .with_pattern("*.log,*.out")
            .collect();

        fs::remove_dir_all(&dir).ok();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| {
            let ext = f.extension().unwrap().to_str().unwrap();
            ext == "log" || ext == "out"
        }));
    }

    #[test]
    fn test_single_file_passthrough() {
        let path = std::env::temp_dir().join("uvspec_collector_single.log");
        File::create(&path).unwrap();

        let files = FileCollector::new(path.clone()).with_pattern("*.out").collect();
        fs::remove_file(&path).ok();

        // 单文件输入不做模式过滤
        assert_eq!(files, vec![path]);
    }
}
