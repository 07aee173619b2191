//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 시 스키마 레지스트리 등록 현황을 시각적으로 출력합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// 텍스트는 고정 너비 박스 안에서 중앙 정렬됩니다.
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║             Request Schema Registry             ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

fn boxed_title(title: &str) -> String {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    format!("╔{}╗\n║{:^50}║\n╚{}╝", border, title, border)
}

/// 등록된 스키마 한 줄을 출력합니다
///
/// Output:
/// ```text
///    ├─ AddPayment: 4 fields (2 required)
/// ```
pub fn print_schema_line(name: &str, fields: usize, required: usize) {
    println!("{}", schema_line(name, fields, required));
}

fn schema_line(name: &str, fields: usize, required: usize) -> String {
    format!("   ├─ {}: {} fields ({} required)", name, fields, required)
}

/// 레지스트리 요약을 출력합니다
pub fn print_registry_summary(schemas: usize) {
    println!("   📋 Registered schemas: {}", schemas);
    println!();
}
