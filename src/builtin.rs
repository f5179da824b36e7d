pub const BUILTIN_CSS: &str = include_str!("builtin.css");

/// Browser-side twin of `ToggleController`: one document-level listener.
/// Labels come from `data-expand-label` / `data-collapse-label` on `<body>`.
pub const STORY_TOGGLE_JS: &str = r#"(function () {
  var labels = document.body ? document.body.dataset : {};
  var expandLabel = labels.expandLabel || "expand full text";
  var collapseLabel = labels.collapseLabel || "collapse";

  document.addEventListener("click", function (event) {
    var start = event.target;
    if (start && start.nodeType !== 1) start = start.parentElement;
    var control = start && start.closest("[data-story-toggle-target-id]");
    if (!control) return;
    var target = document.getElementById(control.dataset.storyToggleTargetId);
    if (!target) return;
    var collapsed = target.dataset.collapsed !== "false";
    target.dataset.collapsed = collapsed ? "false" : "true";
    control.textContent = collapsed ? collapseLabel : expandLabel;
  });
})();"#;
