//! 터미널 출력 포맷팅 유틸리티
//! 
//! 앱 부트스트랩 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 레지스트리 요약을 출력합니다.

use crate::components::registry::RegistrySummary;

/// 박스 형태로 둘러싸인 제목을 출력합니다
/// 
/// Unicode 박스 문자를 사용하여 시각적으로 눈에 띄는 제목을 출력합니다.
/// 텍스트는 자동으로 중앙 정렬됩니다.
/// 
/// # Arguments
/// 
/// * `title` - 출력할 제목 문자열
/// 
/// # Examples
/// 
/// ```rust,ignore
/// use crate::utils::display_terminal::print_boxed_title;
/// 
/// print_boxed_title("host v0.1.0");
/// ```
/// 
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                   host v0.1.0                   ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);  // ^49로 49칸 중앙 정렬
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
/// 
/// 특정 단계가 시작되었음을 화살표 기호와 함께 출력합니다.
/// 
/// # Arguments
/// 
/// * `step` - 단계 번호 (1부터 시작)
/// * `description` - 단계 설명
/// 
/// # Examples
/// 
/// ```rust,ignore
/// use crate::utils::display_terminal::print_step_start;
/// 
/// print_step_start(1, "Initializing extensions");
/// ```
/// 
/// Output:
/// ```text
/// → Step 1: Initializing extensions
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
/// 
/// 특정 단계가 완료되었음을 체크 표시와 함께 출력하고,
/// 처리된 항목 수를 함께 표시합니다.
/// 
/// # Arguments
/// 
/// * `step` - 완료된 단계 번호
/// * `description` - 단계 설명
/// * `count` - 처리된 항목 수
/// 
/// # Examples
/// 
/// ```rust,ignore
/// use crate::utils::display_terminal::print_step_complete;
/// 
/// print_step_complete(3, "Components registered", 5);
/// ```
/// 
/// Output:
/// ```text
/// ✓ Step 3: Components registered (5 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 표시합니다
/// 
/// 들여쓰기된 트리 구조로 하위 작업의 진행 상황을 출력합니다.
/// 
/// # Arguments
/// 
/// * `name` - 서브 작업의 이름
/// * `status` - 현재 상태 또는 결과
/// 
/// # Examples
/// 
/// ```rust,ignore
/// use crate::utils::display_terminal::print_sub_task;
/// 
/// print_sub_task("auth", "2 exported");
/// print_sub_task("Data components", "1");
/// ```
/// 
/// Output:
/// ```text
///    ├─ auth: 2 exported
///    ├─ Data components: 1
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 요약을 출력합니다
/// 
/// 종류별 컴포넌트 수와 export 수를 강조된 형태로 출력합니다.
/// 
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║          🎉 COMPONENT REGISTRY INITIALIZED        ║
/// ╚══════════════════════════════════════════════════╝
///    📦 controller: 1
///    📦 repository: 1
///    🔗 Exported: 1
///    🧾 Data Components: 0
///    🚀 Total Components: 2
/// ```
pub fn print_registry_summary(summary: &RegistrySummary) {
    println!();
    print_boxed_title("🎉 COMPONENT REGISTRY INITIALIZED");
    for (component_type, count) in &summary.by_type {
        println!("   📦 {}: {}", component_type, count);
    }
    println!("   🔗 Exported: {}", summary.exported);
    println!("   🧾 Data Components: {}", summary.data_components);
    println!("   🚀 Total Components: {}", summary.total);
    println!();
}
