//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责驱动整条题目链，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `chain_runner` - 题目链处理器
//! - 从初始地址开始串行推进
//! - 控制链条总时间预算
//! - 收敛所有错误为部分结果
//! - 输出全局统计信息
//!
//! ## 层次关系
//!
//! ```text
//! chain_runner (处理整条链)
//!     ↓
//! workflow::QuizFlow (处理单道题)
//!     ↓
//! services (能力层：parse / answer / format)
//!     ↓
//! clients / browser (客户端层：llm / http / chromium)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：chain_runner 只管推进与终止，不做具体业务判断
//! 2. **错误收敛**：链条只会提前终止，不会向调用方抛错
//! 3. **向下依赖**：编排层 → workflow → services → clients

pub mod chain_runner;

pub use chain_runner::ChainRunner;
