pub const TITLE: &str = "AI Observatory";

pub const TABS: &[(&str, &str)] = &[
    ("monitor", "📊 Monitor"),
    ("evo", "🧬 Evolution"),
    ("intel", "🗂 Conversations"),
    ("overview", "🧭 Overview"),
];

pub const STYLE: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:'Segoe UI',system-ui,-apple-system,sans-serif;background:#1e1e2e;color:#cdd6f4;padding:24px;min-height:100vh}
.header{display:flex;align-items:center;justify-content:space-between;margin-bottom:20px;padding-bottom:16px;border-bottom:1px solid #313244}
.header h1{font-size:1.6em;font-weight:700}.header h1 span{color:#89b4fa}
.header .meta{text-align:right;font-size:0.85em;color:#6c7086}
.tabs{display:flex;gap:4px;margin-bottom:20px;background:#181825;border-radius:10px;padding:4px}
.tab{flex:1;padding:10px 16px;border:none;background:transparent;color:#6c7086;font-size:0.95em;cursor:pointer;border-radius:8px;font-weight:600}
.tab:hover{color:#cdd6f4}.tab.active{background:#313244;color:#89b4fa}
.tab-content{display:none}.tab-content.active{display:block}
.stats-grid{display:grid;grid-template-columns:repeat(4,1fr);gap:16px;margin-bottom:20px}
.stat-card{background:#2a2a3c;border-radius:12px;padding:20px;text-align:center;border:1px solid #313244}
.stat-value{font-size:2.2em;font-weight:700;margin-bottom:4px}
.stat-label{font-size:0.85em;color:#6c7086;letter-spacing:1px}
.c-blue .stat-value{color:#89b4fa}.c-green .stat-value{color:#a6e3a1}
.c-purple .stat-value{color:#cba6f7}.c-yellow .stat-value{color:#f9e2af}
.panels{display:grid;grid-template-columns:1fr 1fr;gap:16px;margin-bottom:16px}
.panel{background:#2a2a3c;border-radius:12px;padding:20px;border:1px solid #313244}
.panel h2{font-size:1.1em;margin-bottom:16px;display:flex;align-items:center;gap:8px}
.panel h2::before{content:'';display:inline-block;width:4px;height:18px;background:#89b4fa;border-radius:2px}
.full-width{grid-column:1/-1}
.bar-row{display:flex;align-items:center;gap:10px;margin-bottom:8px}
.bar-label{width:180px;font-size:0.85em;text-align:right;flex-shrink:0}
.bar-track{flex:1;height:20px;background:#313244;border-radius:4px;overflow:hidden}
.bar-fill{height:100%;background:linear-gradient(90deg,#89b4fa,#74c7ec);border-radius:4px;min-width:2px}
.bar-fill.alt{background:linear-gradient(90deg,#cba6f7,#f38ba8)}
.bar-count{width:60px;font-size:0.85em;color:#6c7086;text-align:right}
table{width:100%;border-collapse:collapse;font-size:0.9em}
th{text-align:left;padding:8px 12px;border-bottom:2px solid #313244;color:#6c7086;font-weight:600;font-size:0.8em}
td{padding:8px 12px;border-bottom:1px solid #313244}tr:hover td{background:#313244}
.num{text-align:right;font-variant-numeric:tabular-nums;font-weight:600;color:#89b4fa}
.empty{text-align:center;color:#6c7086;padding:20px;font-style:italic}
code{background:#313244;padding:2px 6px;border-radius:4px;font-size:0.9em}
.ops-container{max-height:400px;overflow-y:auto}
.op-row{display:flex;align-items:center;gap:10px;padding:6px 8px;border-bottom:1px solid #313244;font-size:0.85em}
.op-row:hover{background:#313244}.op-time{color:#6c7086;font-family:monospace;flex-shrink:0;width:70px}
.op-icon{flex-shrink:0;width:24px;text-align:center}
.op-action{color:#cba6f7;flex-shrink:0;width:180px;font-family:monospace;font-size:0.9em}
.op-detail{color:#a6adc8;overflow:hidden;text-overflow:ellipsis;white-space:nowrap;flex:1}
.tree-cat{margin-bottom:8px}
.tree-hdr{background:#313244;border-radius:6px;padding:10px 14px;cursor:pointer;display:flex;align-items:center;gap:6px;font-size:0.9em}
.tree-hdr:hover{background:#3a3a4c}
.tree-arrow{color:#6c7086;font-size:0.7em;display:inline-block}
.tree-arrow.open{transform:rotate(90deg)}
.tree-cnt{color:#6c7086;font-size:0.85em;margin-left:auto}
.tree-body{padding-left:24px;margin-top:4px}
.tree-file{display:flex;align-items:center;gap:8px;padding:5px 10px;border-left:2px solid #313244;font-size:0.83em}
.tree-file.new{border-left-color:#a6e3a1}.tree-file.modified{border-left-color:#f9e2af}
.tf-name{flex:1;overflow:hidden;text-overflow:ellipsis;white-space:nowrap}
.tf-size{color:#6c7086;font-size:0.85em;min-width:60px;text-align:right}
.tf-time{color:#6c7086;font-size:0.85em;min-width:90px;text-align:right;font-family:monospace}
.badge-new{background:#a6e3a1;color:#1e1e2e;padding:1px 6px;border-radius:4px;font-size:0.75em;font-weight:600;margin-left:4px}
.badge-mod{background:#f9e2af;color:#1e1e2e;padding:1px 6px;border-radius:4px;font-size:0.75em;font-weight:600;margin-left:4px}
.tl-item{display:flex;align-items:center;gap:8px;padding:6px 8px;border-bottom:1px solid #313244;font-size:0.85em}
.tl-item.new{border-left:3px solid #a6e3a1}.tl-item.modified{border-left:3px solid #f9e2af}.tl-item.stable{border-left:3px solid #45475a}
.tl-time{color:#6c7086;font-family:monospace;min-width:80px}
.tl-name{flex:1}.tl-cat{color:#6c7086;font-size:0.85em}
.active-dot{color:#a6e3a1;font-size:0.75em}
.cap-grid{display:grid;grid-template-columns:repeat(3,1fr);gap:12px}
.cap-card{background:#313244;border-radius:8px;padding:14px;text-align:center}
.cap-icon{font-size:1.8em;margin-bottom:6px}.cap-num{font-size:1.6em;font-weight:700;color:#89b4fa}
.cap-label{font-size:0.8em;color:#6c7086;margin-top:2px}
.footer{text-align:center;color:#6c7086;font-size:0.8em;margin-top:24px}
"#;

pub const SCRIPT: &str = r#"
function switchTab(id,btn){
    document.querySelectorAll('.tab-content').forEach(function(e){e.classList.remove('active')});
    document.querySelectorAll('.tab').forEach(function(e){e.classList.remove('active')});
    document.getElementById('tab-'+id).classList.add('active');
    btn.classList.add('active');
    location.hash=id;
}
function toggleTree(hdr){
    var body=hdr.nextElementSibling;
    var arrow=hdr.querySelector('.tree-arrow');
    if(body.style.display==='none'){body.style.display='block';arrow.classList.add('open');}
    else{body.style.display='none';arrow.classList.remove('open');}
}
(function(){
    var h=location.hash.replace('#','');
    if(!h){return;}
    var el=document.getElementById('tab-'+h);
    if(!el){return;}
    document.querySelectorAll('.tab-content').forEach(function(e){e.classList.remove('active')});
    document.querySelectorAll('.tab').forEach(function(e){e.classList.remove('active')});
    el.classList.add('active');
    var btn=document.querySelector('.tab[data-tab="'+h+'"]');
    if(btn){btn.classList.add('active');}
})();
"#;
